use crate::elements::NAME_SAND;

pub const DEFAULT_BRUSH_RADIUS: i32 = 2;

/// Brush/cursor state written by the host input layer, read once per tick.
///
/// `deposit` and `erase` are independent; when both are set, deposit wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointerState {
    /// Pointer cell column.
    pub x: i32,
    /// Pointer cell row.
    pub y: i32,
    pub radius: i32,
    /// Name of the material to deposit.
    pub active: String,
    pub deposit: bool,
    pub erase: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            radius: DEFAULT_BRUSH_RADIUS,
            active: NAME_SAND.to_string(),
            deposit: false,
            erase: false,
        }
    }
}

impl PointerState {
    pub fn idle(&self) -> bool {
        !self.deposit && !self.erase
    }

    /// Move the pointer to cell `(x, y)`.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_a_button_is_held() {
        let mut p = PointerState::default();
        assert!(p.idle());
        p.erase = true;
        assert!(!p.idle());
        p.erase = false;
        p.deposit = true;
        assert!(!p.idle());
    }
}
