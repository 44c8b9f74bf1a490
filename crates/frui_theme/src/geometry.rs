//! Placement geometry for floating elements (tooltips, dropdown menus).
//!
//! [`resolve_position`] takes the anchor's and the floating element's bounding
//! rectangles plus a set of advisory side flags, picks one [`Placement`] and
//! returns the floating element's offset from the anchor's origin together with
//! the direction its arrow should point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gap, in CSS pixels, between the anchor edge and an arrowed floating element.
pub const DEFAULT_CLEARANCE: f64 = 5.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
/// Snapshot of an element's on-screen box, as reported by the layout engine.
pub struct Rect {
    /// Distance from the viewport top edge.
    pub top: f64,
    /// Distance from the viewport left edge.
    pub left: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
}

impl Rect {
    /// Builds a rectangle from its top-left corner and size.
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Builds a rectangle at the origin with the given size.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Bottom edge (`top + height`).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge (`left + width`).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    fn finite_width(&self) -> f64 {
        finite_or_zero(self.width)
    }

    fn finite_height(&self) -> f64 {
        finite_or_zero(self.height)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// One edge of a rectangle.
pub enum Side {
    /// Top edge.
    #[default]
    Top,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

impl Side {
    /// All sides in CSS shorthand order (top, right, bottom, left).
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// The geometrically opposite edge.
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// CSS token for the side (`"top"`, `"bottom"`, ...).
    pub fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Returned when a string does not name a [`Side`].
#[error("unknown side `{0}`, expected one of top, bottom, left, right")]
pub struct ParseSideError(pub String);

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseSideError(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// Advisory side preference supplied by a caller as independent flags.
///
/// Any combination is accepted. Contradictory flags are settled by the
/// precedence in [`Placement::from_flags`]; no flag at all means `top`.
pub struct SideFlags {
    /// Prefer the top edge.
    pub top: bool,
    /// Prefer the bottom edge.
    pub bottom: bool,
    /// Prefer (or align to) the left edge.
    pub left: bool,
    /// Prefer (or align to) the right edge.
    pub right: bool,
}

impl SideFlags {
    /// Flags with a single side set.
    pub fn only(side: Side) -> Self {
        let mut flags = Self::default();
        flags.set(side);
        flags
    }

    /// Returns the flags with `side` additionally set.
    pub fn with(mut self, side: Side) -> Self {
        self.set(side);
        self
    }

    fn set(&mut self, side: Side) {
        match side {
            Side::Top => self.top = true,
            Side::Bottom => self.bottom = true,
            Side::Left => self.left = true,
            Side::Right => self.right = true,
        }
    }

    /// Whether no flag is set.
    pub fn is_empty(&self) -> bool {
        !(self.top || self.bottom || self.left || self.right)
    }

    /// These flags, or only `fallback` when none is set.
    pub fn or(self, fallback: Side) -> Self {
        if self.is_empty() {
            Self::only(fallback)
        } else {
            self
        }
    }
}

impl From<Side> for SideFlags {
    fn from(side: Side) -> Self {
        Self::only(side)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// Resolved placement of a floating element around its anchor.
pub enum Placement {
    /// Below the anchor, left edges aligned.
    BottomLeft,
    /// Below the anchor, right edges aligned.
    BottomRight,
    /// Above the anchor, left edges aligned.
    TopLeft,
    /// Above the anchor, right edges aligned.
    TopRight,
    /// Left of the anchor, vertically centered.
    Left,
    /// Right of the anchor, vertically centered.
    Right,
    /// Below the anchor, horizontally centered.
    Bottom,
    /// Above the anchor, horizontally centered.
    #[default]
    Top,
}

impl Placement {
    /// Selects a placement; corners are checked before single sides.
    pub fn from_flags(flags: SideFlags) -> Self {
        if flags.bottom && flags.left {
            Self::BottomLeft
        } else if flags.bottom && flags.right {
            Self::BottomRight
        } else if flags.top && flags.left {
            Self::TopLeft
        } else if flags.top && flags.right {
            Self::TopRight
        } else if flags.left {
            Self::Left
        } else if flags.right {
            Self::Right
        } else if flags.bottom {
            Self::Bottom
        } else {
            Self::Top
        }
    }

    /// The anchor edge the floating element sits against.
    pub fn side(self) -> Side {
        match self {
            Self::BottomLeft | Self::BottomRight | Self::Bottom => Side::Bottom,
            Self::TopLeft | Self::TopRight | Self::Top => Side::Top,
            Self::Left => Side::Left,
            Self::Right => Side::Right,
        }
    }

    /// Class token (`"bottom-left"`, `"top"`, ...).
    pub fn token(self) -> &'static str {
        match self {
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Top => "top",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// How the floating element relates to its anchor in the layout.
pub enum PositionMode {
    /// Absolutely positioned overlay with an arrow and clearance gap.
    #[default]
    Absolute,
    /// Layout sibling of the anchor: no gap, no arrow.
    Relative,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
/// Computed placement result, relative to the anchor's origin.
pub struct Offset {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
    /// Where the arrow points (back toward the anchor), if one is drawn.
    pub direction: Option<Side>,
}

/// Resolves a floating element's offset with [`DEFAULT_CLEARANCE`].
pub fn resolve_position(
    anchor: &Rect,
    floating: &Rect,
    side: SideFlags,
    mode: PositionMode,
) -> Offset {
    resolve_position_with(anchor, floating, side, mode, DEFAULT_CLEARANCE)
}

/// Resolves a floating element's offset with an explicit clearance.
///
/// Never fails: zero-sized or non-finite rectangles degrade to zero or
/// overlapping offsets.
pub fn resolve_position_with(
    anchor: &Rect,
    floating: &Rect,
    side: SideFlags,
    mode: PositionMode,
    clearance: f64,
) -> Offset {
    let (aw, ah) = (anchor.finite_width(), anchor.finite_height());
    let (fw, fh) = (floating.finite_width(), floating.finite_height());
    let gap = match mode {
        PositionMode::Absolute => finite_or_zero(clearance),
        PositionMode::Relative => 0.0,
    };

    let placement = Placement::from_flags(side);
    let (x, y) = match placement {
        Placement::BottomLeft => (0.0, ah + gap),
        Placement::BottomRight => (aw - fw, ah + gap),
        Placement::TopLeft => (0.0, -(fh + gap)),
        Placement::TopRight => (aw - fw, -(fh + gap)),
        Placement::Left => (-(fw + gap), ah / 2.0 - fh / 2.0),
        Placement::Right => (aw + gap, ah / 2.0 - fh / 2.0),
        Placement::Bottom => (aw / 2.0 - fw / 2.0, ah + gap),
        Placement::Top => (aw / 2.0 - fw / 2.0, -(fh + gap)),
    };

    let direction = match mode {
        PositionMode::Absolute => Some(placement.side().opposite()),
        PositionMode::Relative => None,
    };

    Offset { x, y, direction }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn anchor() -> Rect {
        Rect::sized(100.0, 20.0)
    }

    fn floating() -> Rect {
        Rect::sized(50.0, 10.0)
    }

    fn resolve(flags: SideFlags) -> Offset {
        resolve_position(&anchor(), &floating(), flags, PositionMode::Absolute)
    }

    fn offset(x: f64, y: f64, direction: Side) -> Offset {
        Offset {
            x,
            y,
            direction: Some(direction),
        }
    }

    #[test]
    fn corner_combinations_resolve_before_single_sides() {
        let bottom_left = SideFlags::only(Side::Bottom).with(Side::Left);
        let bottom_right = SideFlags::only(Side::Bottom).with(Side::Right);
        let top_left = SideFlags::only(Side::Top).with(Side::Left);
        let top_right = SideFlags::only(Side::Top).with(Side::Right);

        assert_eq!(resolve(bottom_left), offset(0.0, 25.0, Side::Top));
        assert_eq!(resolve(bottom_right), offset(50.0, 25.0, Side::Top));
        assert_eq!(resolve(top_left), offset(0.0, -15.0, Side::Bottom));
        assert_eq!(resolve(top_right), offset(50.0, -15.0, Side::Bottom));
    }

    #[test]
    fn single_sides_center_on_the_cross_axis() {
        assert_eq!(resolve(Side::Left.into()), offset(-55.0, 5.0, Side::Right));
        assert_eq!(resolve(Side::Right.into()), offset(105.0, 5.0, Side::Left));
        assert_eq!(resolve(Side::Bottom.into()), offset(25.0, 25.0, Side::Top));
        assert_eq!(resolve(Side::Top.into()), offset(25.0, -15.0, Side::Bottom));
    }

    #[test]
    fn no_flags_matches_top_branch() {
        assert_eq!(resolve(SideFlags::default()), resolve(Side::Top.into()));
    }

    #[test]
    fn configured_fallback_only_applies_without_flags() {
        assert_eq!(SideFlags::default().or(Side::Right), SideFlags::only(Side::Right));
        assert_eq!(
            SideFlags::only(Side::Bottom).or(Side::Right),
            SideFlags::only(Side::Bottom)
        );
    }

    #[test]
    fn contradictory_flags_follow_precedence() {
        let all = SideFlags {
            top: true,
            bottom: true,
            left: true,
            right: true,
        };
        assert_eq!(Placement::from_flags(all), Placement::BottomLeft);

        let left_right = SideFlags::only(Side::Left).with(Side::Right);
        assert_eq!(Placement::from_flags(left_right), Placement::Left);

        let top_bottom = SideFlags::only(Side::Top).with(Side::Bottom);
        assert_eq!(Placement::from_flags(top_bottom), Placement::Bottom);

        let top_right_left = SideFlags::only(Side::Top)
            .with(Side::Right)
            .with(Side::Left);
        assert_eq!(Placement::from_flags(top_right_left), Placement::TopLeft);
    }

    #[test]
    fn relative_mode_drops_clearance_and_arrow() {
        let result = resolve_position(
            &anchor(),
            &floating(),
            SideFlags::only(Side::Bottom).with(Side::Right),
            PositionMode::Relative,
        );
        assert_eq!(
            result,
            Offset {
                x: 50.0,
                y: 20.0,
                direction: None
            }
        );
    }

    #[test]
    fn resolution_is_pure() {
        let flags = SideFlags::only(Side::Right);
        let first = resolve(flags);
        let second = resolve(flags);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_and_non_finite_rectangles_degrade_without_panicking() {
        let empty = Rect::default();
        let result = resolve_position(&empty, &empty, SideFlags::default(), PositionMode::Absolute);
        assert_eq!(result, offset(0.0, -DEFAULT_CLEARANCE, Side::Bottom));

        let broken = Rect::sized(f64::NAN, f64::INFINITY);
        let result = resolve_position(&broken, &floating(), Side::Bottom.into(), PositionMode::Absolute);
        assert_eq!(result, offset(-25.0, DEFAULT_CLEARANCE, Side::Top));
    }

    #[test]
    fn custom_clearance_is_applied() {
        let result = resolve_position_with(
            &anchor(),
            &floating(),
            Side::Right.into(),
            PositionMode::Absolute,
            12.0,
        );
        assert_eq!(result.x, 112.0);
    }

    #[test]
    fn sides_parse_from_tokens() {
        assert_eq!("Bottom".parse::<Side>(), Ok(Side::Bottom));
        assert_eq!(" left ".parse::<Side>(), Ok(Side::Left));
        assert_eq!(
            "middle".parse::<Side>(),
            Err(ParseSideError("middle".to_string()))
        );
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Top.to_string(), "top");
    }

    #[test]
    fn rect_edges_are_derived() {
        let rect = Rect::new(10.0, 4.0, 30.0, 8.0);
        assert_eq!(rect.bottom(), 18.0);
        assert_eq!(rect.right(), 34.0);
    }

    #[test]
    fn default_placement_matches_empty_flags() {
        assert_eq!(Placement::default(), Placement::from_flags(SideFlags::default()));
        assert_eq!(Placement::default().token(), "top");
    }
}
