//! Colors shared by both figures.
//!
//! Fills are light tints that stay distinguishable when printed in
//! grayscale; each has a saturated border partner.

pub const DATA: &str = "#E8F4FD";
pub const MODEL1: &str = "#FFF3E0";
pub const MODEL2: &str = "#E8F5E9";
pub const MODEL3: &str = "#F3E5F5";
pub const STATE: &str = "#FFFFFF";
pub const OUTPUT: &str = "#FFEBEE";
pub const FEEDBACK: &str = "#FFF8E1";

pub const BORDER_DATA: &str = "#1976D2";
pub const BORDER_MODEL1: &str = "#E65100";
pub const BORDER_MODEL2: &str = "#2E7D32";
pub const BORDER_MODEL3: &str = "#7B1FA2";
pub const BORDER_STATE: &str = "#424242";
pub const BORDER_OUTPUT: &str = "#C62828";
pub const BORDER_FEEDBACK: &str = "#FF8F00";

pub const ARROW_DIRECT: &str = "#333333";
pub const ARROW_FEEDBACK: &str = "#D32F2F";

/// Muted grey for annotations and secondary text.
pub const ANNOTATION: &str = "#666666";
pub const SUBTITLE: &str = "#555555";
