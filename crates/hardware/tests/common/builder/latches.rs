use mipsim_core::core::pipeline::latches::IssueEntry;
use mipsim_core::isa::Opcode;

pub struct IssueEntryBuilder(IssueEntry);

impl IssueEntryBuilder {
    pub fn new(opcode: Opcode) -> Self {
        Self(IssueEntry {
            opcode,
            rd: 0,
            v1: 0,
            v2: 0,
        })
    }

    pub fn rd(mut self, rd: usize) -> Self {
        self.0.rd = rd;
        self
    }

    pub fn operands(mut self, v1: i32, v2: i32) -> Self {
        self.0.v1 = v1;
        self.0.v2 = v2;
        self
    }

    pub fn build(self) -> IssueEntry {
        self.0
    }
}
