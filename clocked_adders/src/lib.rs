//! # Clocked Adders
//!
//! Single-cycle registered adders, the clocked counterpart to the
//! zero-time transaction-level transport path.
//!
//! ## Philosophy
//!
//! **Combinational transport and clocked state update are different
//! models and must not be conflated.**
//!
//! The transport path completes in a single synchronous call with no time
//! axis. These adders instead advance on explicit discrete clock edges:
//! inputs may change at any time, but the registered output only changes
//! when [`ClockedModule::on_posedge`] samples them. They expose only
//! "sample on clock edge, write result" and have no error paths.

/// A module driven by discrete rising clock edges
pub trait ClockedModule {
    /// Samples inputs and updates registered state for one clock edge
    fn on_posedge(&mut self);
}

/// Word types a registered adder can sum
///
/// Integer words wrap like two's-complement hardware; floating-point
/// words follow IEEE semantics.
pub trait AdderWord: Copy + Default {
    /// Adds two words with the type's hardware semantics
    fn add_words(self, other: Self) -> Self;
}

impl AdderWord for i32 {
    fn add_words(self, other: Self) -> Self {
        self.wrapping_add(other)
    }
}

impl AdderWord for i64 {
    fn add_words(self, other: Self) -> Self {
        self.wrapping_add(other)
    }
}

impl AdderWord for f64 {
    fn add_words(self, other: Self) -> Self {
        self + other
    }
}

/// A single-cycle registered adder
///
/// `op1` and `op2` are plain input signals; `result` is a register that
/// holds the sum sampled at the most recent rising edge. Before the first
/// edge the register holds the type's default value.
#[derive(Debug, Clone, Default)]
pub struct RegisteredAdder<T: AdderWord> {
    op1: T,
    op2: T,
    result: T,
}

/// Registered adder over 32-bit integers
pub type IntAdder = RegisteredAdder<i32>;

/// Registered adder over 64-bit floats
pub type DoubleAdder = RegisteredAdder<f64>;

impl<T: AdderWord> RegisteredAdder<T> {
    /// Creates an adder with zeroed inputs and register
    pub fn new() -> Self {
        Self::default()
    }

    /// Drives the input signals
    ///
    /// Takes effect on the next rising edge; the registered output is
    /// unaffected until then.
    pub fn set_inputs(&mut self, op1: T, op2: T) {
        self.op1 = op1;
        self.op2 = op2;
    }

    /// Reads the registered output
    pub fn result(&self) -> T {
        self.result
    }
}

impl<T: AdderWord> ClockedModule for RegisteredAdder<T> {
    fn on_posedge(&mut self) {
        self.result = self.op1.add_words(self.op2);
    }
}
