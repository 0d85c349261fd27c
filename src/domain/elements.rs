//! Element Definitions - identity, physical class, color and update rule
//!
//! The four built-in materials always occupy ids 0..=3 in this order.
//! Extension materials are appended after them.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::behaviors::Behavior;

pub type ElementId = u8;

pub const EL_AIR: ElementId = 0;
pub const EL_SAND: ElementId = 1;
pub const EL_WATER: ElementId = 2;
pub const EL_WOOD: ElementId = 3;

pub const NAME_AIR: &str = "air";
pub const NAME_SAND: &str = "sand";
pub const NAME_WATER: &str = "water";
pub const NAME_WOOD: &str = "wood";

/// Physical class used by rules to test neighbor compatibility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementClass {
    Empty,
    Granular,
    Liquid,
    Rigid,
}

impl ElementClass {
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "empty" => Some(Self::Empty),
            "granular" => Some(Self::Granular),
            "liquid" => Some(Self::Liquid),
            "rigid" => Some(Self::Rigid),
            _ => None,
        }
    }
}

/// 8-bit RGB base color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Split a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Lighten every channel by `grain`, saturating at 255.
    #[inline]
    pub fn shaded(self, grain: u8) -> Self {
        Self {
            r: self.r.saturating_add(grain),
            g: self.g.saturating_add(grain),
            b: self.b.saturating_add(grain),
        }
    }

    /// Pack as ABGR with full alpha (little-endian bytes RR,GG,BB,AA for canvas ImageData).
    #[inline]
    pub fn to_abgr(self) -> u32 {
        0xFF00_0000 | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }
}

/// A material definition. `id` is assigned by the registry on registration.
#[derive(Clone)]
pub struct ElementDefinition {
    pub(crate) id: ElementId,
    pub name: String,
    pub class: ElementClass,
    pub color: Rgb,
    /// Deposits of grainy materials are sparsified by the brush.
    pub grain: bool,
    rule: Option<Arc<dyn Behavior + Send + Sync>>,
}

impl ElementDefinition {
    /// Static material of the given class. `grain` follows the class.
    pub fn new(name: impl Into<String>, class: ElementClass, color: Rgb) -> Self {
        Self {
            id: EL_AIR,
            name: name.into(),
            class,
            color,
            grain: class == ElementClass::Granular,
            rule: None,
        }
    }

    pub fn with_rule<B>(mut self, rule: B) -> Self
    where
        B: Behavior + Send + Sync + 'static,
    {
        self.rule = Some(Arc::new(rule));
        self
    }

    pub fn with_shared_rule(mut self, rule: Arc<dyn Behavior + Send + Sync>) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn with_grain(mut self, grain: bool) -> Self {
        self.grain = grain;
        self
    }

    #[inline]
    pub fn id(&self) -> ElementId {
        self.id
    }

    #[inline]
    pub fn rule(&self) -> Option<&Arc<dyn Behavior + Send + Sync>> {
        self.rule.as_ref()
    }

    #[inline]
    pub fn is_empty_class(&self) -> bool {
        self.class == ElementClass::Empty
    }
}

impl fmt::Debug for ElementDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementDefinition")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("class", &self.class)
            .field("color", &self.color)
            .field("grain", &self.grain)
            .field("animated", &self.rule.is_some())
            .finish()
    }
}
