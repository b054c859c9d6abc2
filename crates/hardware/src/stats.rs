//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (IPC, CPI).
//! 2. **Instruction mix:** Retirements on the ALU and load paths.
//! 3. **Stalls:** Decode cycles lost to the register-busy interlock.
//! 4. **Input health:** Skipped input lines and instructions dropped by a full queue.

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Instructions that left the queue.
    pub decoded: u64,
    /// Results committed from the ALU slot.
    pub retired_alu: u64,
    /// Results committed from the load slot.
    pub retired_load: u64,
    /// Cycles in which decode held the queue head back on a busy register.
    pub decode_stalls: u64,
    /// Cycles in which both result slots retired together.
    pub dual_writebacks: u64,
    /// Well-formed instructions rejected because the queue was full.
    pub dropped_instructions: u64,
    /// Malformed input lines skipped by the loaders.
    pub skipped_lines: u64,
}

impl SimStats {
    /// Total instructions retired on both paths.
    pub const fn instructions_retired(&self) -> u64 {
        self.retired_alu + self.retired_load
    }

    /// Retired instructions per cycle, or `0.0` before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired() as f64 / self.cycles as f64
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        print!("{}", self.report());
    }

    /// Renders the statistics report.
    pub fn report(&self) -> String {
        let retired = self.instructions_retired();
        let cpi = if retired == 0 {
            0.0
        } else {
            self.cycles as f64 / retired as f64
        };
        let pct = |n: u64, d: u64| {
            if d == 0 {
                0.0
            } else {
                (n as f64 / d as f64) * 100.0
            }
        };

        let mut out = String::new();
        let mut line = |s: String| {
            out.push_str(&s);
            out.push('\n');
        };

        line("\n==========================================================".into());
        line("PIPELINE SIMULATION STATISTICS".into());
        line("==========================================================".into());
        line(format!("sim_cycles               {}", self.cycles));
        line(format!("sim_insts                {retired}"));
        line(format!("sim_ipc                  {:.4}", self.ipc()));
        line(format!("sim_cpi                  {cpi:.4}"));
        line("----------------------------------------------------------".into());
        line("INSTRUCTION MIX".into());
        line(format!(
            "  op.alu                 {} ({:.2}%)",
            self.retired_alu,
            pct(self.retired_alu, retired)
        ));
        line(format!(
            "  op.load                {} ({:.2}%)",
            self.retired_load,
            pct(self.retired_load, retired)
        ));
        line("----------------------------------------------------------".into());
        line("PIPELINE".into());
        line(format!("  decoded                {}", self.decoded));
        line(format!(
            "  stalls.decode          {} ({:.2}%)",
            self.decode_stalls,
            pct(self.decode_stalls, self.cycles)
        ));
        line(format!("  writeback.dual         {}", self.dual_writebacks));
        line("----------------------------------------------------------".into());
        line("INPUT".into());
        line(format!("  lines.skipped          {}", self.skipped_lines));
        line(format!("  insts.dropped          {}", self.dropped_instructions));
        line("==========================================================".into());
        out
    }
}
