use mipsim_core::isa::{Instruction, Opcode};

/// Builds program text one instruction at a time.
#[derive(Default)]
pub struct ProgramBuilder {
    lines: Vec<String>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inst(mut self, op: Opcode, rd: usize, rs: usize, rt: usize) -> Self {
        self.lines.push(Instruction::new(op, rd, rs, rt).to_string());
        self
    }

    pub fn add(self, rd: usize, rs: usize, rt: usize) -> Self {
        self.inst(Opcode::Add, rd, rs, rt)
    }

    pub fn sub(self, rd: usize, rs: usize, rt: usize) -> Self {
        self.inst(Opcode::Sub, rd, rs, rt)
    }

    pub fn and(self, rd: usize, rs: usize, rt: usize) -> Self {
        self.inst(Opcode::And, rd, rs, rt)
    }

    pub fn or(self, rd: usize, rs: usize, rt: usize) -> Self {
        self.inst(Opcode::Or, rd, rs, rt)
    }

    pub fn ld(self, rd: usize, rs: usize, rt: usize) -> Self {
        self.inst(Opcode::Ld, rd, rs, rt)
    }

    /// Appends a raw line verbatim (for malformed-input tests).
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_owned());
        self
    }

    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}
