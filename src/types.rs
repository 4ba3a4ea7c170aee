/// Type alias for one row of inputs to an operator, one truth value per place (see
/// [`Operator`][crate::Operator])
pub type Valuation = Box<[bool]>;

/// Type alias for the name of an atomic proposition (see [`Proposition`][crate::Proposition])
pub type Symbol = char;
