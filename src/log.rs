pub mod targets {
    pub const INFERENCE: &str = "inference";
    pub const ELIMINATION: &str = "elimination";
    pub const INTRODUCTION: &str = "introduction";
}
