//! Trim option: removes the surrounding background

/// Background trimming with a similarity threshold and optional modifiers
///
/// Always renders four positional arguments:
/// `threshold:color:equal_horizontal:equal_vertical`, where unset modifiers
/// are left empty and set flags render as `1`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trim {
    /// Color similarity tolerance
    pub threshold: u32,
    /// Hex-coded color to cut off (detected from the image when unset)
    pub color: Option<String>,
    /// Cut equal amounts from the left and right sides
    pub equal_horizontal: bool,
    /// Cut equal amounts from the top and bottom sides
    pub equal_vertical: bool,
}

impl Trim {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn equal_horizontal(mut self) -> Self {
        self.equal_horizontal = true;
        self
    }

    pub fn equal_vertical(mut self) -> Self {
        self.equal_vertical = true;
        self
    }

    pub(crate) fn arguments(&self) -> Vec<String> {
        vec![
            self.threshold.to_string(),
            self.color.clone().unwrap_or_default(),
            flag(self.equal_horizontal),
            flag(self.equal_vertical),
        ]
    }
}

fn flag(set: bool) -> String {
    if set {
        "1".to_string()
    } else {
        String::new()
    }
}
