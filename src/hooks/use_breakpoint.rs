use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            Breakpoint::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Mobile
        }
    }
}

#[hook]
pub fn use_breakpoint() -> Breakpoint {
    let (width, _height) = use_window_size();
    Breakpoint::from_width(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_map_to_breakpoints() {
        assert_eq!(Breakpoint::from_width(0.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(767.9), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1023.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1024.0), Breakpoint::Desktop);
        assert!(Breakpoint::Desktop > Breakpoint::Mobile);
    }
}
