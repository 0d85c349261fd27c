use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::behaviors::{Behavior, LiquidBehavior, PowderBehavior};
use crate::core::console;
use crate::core::EngineError;
use crate::elements::{
    ElementClass, ElementDefinition, ElementId, Rgb, EL_AIR, NAME_AIR, NAME_SAND, NAME_WATER,
    NAME_WOOD,
};

/// Ordered material definitions, addressable by id and by name.
///
/// Ids are dense and assigned in registration order; id 0 is the empty material.
#[derive(Clone, Default)]
pub struct ContentRegistry {
    elements: Vec<ElementDefinition>,
    element_key_to_id: HashMap<String, ElementId>,
}

impl ContentRegistry {
    /// A registry with nothing in it. The first registration must be the empty material.
    pub fn new() -> Self {
        Self::default()
    }

    /// air, sand, water and wood at ids 0..=3.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for def in builtin_definitions() {
            // Built-ins are distinct and start with air, registration cannot fail.
            if let Err(e) = registry.register(def) {
                console::warn(&format!("built-in registration failed: {e}"));
            }
        }
        registry
    }

    /// Append a definition and return its id.
    pub fn register(&mut self, mut def: ElementDefinition) -> Result<ElementId, EngineError> {
        self.check_registrable(&def)?;

        let id = self.elements.len() as ElementId;
        def.id = id;
        self.element_key_to_id.insert(def.name.clone(), id);
        self.elements.push(def);
        Ok(id)
    }

    fn check_registrable(&self, def: &ElementDefinition) -> Result<(), EngineError> {
        let count = self.elements.len();
        if count > ElementId::MAX as usize {
            return Err(EngineError::RegistryFull { count });
        }
        if self.element_key_to_id.contains_key(&def.name) {
            return Err(EngineError::DuplicateName(def.name.clone()));
        }
        if (count == 0) != def.is_empty_class() {
            return Err(EngineError::EmptyNotFirst {
                name: def.name.clone(),
            });
        }
        Ok(())
    }

    /// Register every element of a JSON bundle. Either all of them land or none do.
    pub fn register_bundle_json(&mut self, json: &str) -> Result<Vec<ElementId>, EngineError> {
        let bundle: BundleRoot = serde_json::from_str(json)?;

        let mut staged = self.clone();
        let mut ids = Vec::with_capacity(bundle.elements.len());
        for el in bundle.elements.into_iter() {
            let def = el.into_definition()?;
            ids.push(staged.register(def)?);
        }

        *self = staged;
        console::log(&format!(
            "registered {} extension element(s), {} total",
            ids.len(),
            self.element_count()
        ));
        Ok(ids)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn definition(&self, id: ElementId) -> Option<&ElementDefinition> {
        self.elements.get(id as usize)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &ElementDefinition> {
        self.elements.iter()
    }

    pub fn id_by_name(&self, name: &str) -> Option<ElementId> {
        self.element_key_to_id.get(name).copied()
    }

    pub fn definition_by_name(&self, name: &str) -> Option<&ElementDefinition> {
        self.id_by_name(name).and_then(|id| self.definition(id))
    }

    #[inline]
    pub fn class_of(&self, id: ElementId) -> Option<ElementClass> {
        self.elements.get(id as usize).map(|d| d.class)
    }

    /// True when `id` names a registered empty-class material.
    #[inline]
    pub fn is_empty_id(&self, id: ElementId) -> bool {
        self.class_of(id) == Some(ElementClass::Empty)
    }

    #[inline]
    pub fn rule(&self, id: ElementId) -> Option<&Arc<dyn Behavior + Send + Sync>> {
        self.elements.get(id as usize)?.rule()
    }

    pub fn color(&self, id: ElementId) -> Option<Rgb> {
        self.definition(id).map(|d| d.color)
    }

    pub fn manifest_json(&self) -> String {
        let elements: Vec<ContentManifestElement> = self
            .elements
            .iter()
            .map(|d| ContentManifestElement {
                id: d.id,
                name: &d.name,
                class: d.class,
                color: d.color,
                grain: d.grain,
                animated: d.rule().is_some(),
                hidden: d.id == EL_AIR,
            })
            .collect();
        let out = ContentManifest {
            format_version: 1,
            elements,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}

fn builtin_definitions() -> Vec<ElementDefinition> {
    vec![
        ElementDefinition::new(NAME_AIR, ElementClass::Empty, Rgb::from_hex(0x1F2C33)),
        ElementDefinition::new(NAME_SAND, ElementClass::Granular, Rgb::from_hex(0xFFE980))
            .with_rule(PowderBehavior::new()),
        ElementDefinition::new(NAME_WATER, ElementClass::Liquid, Rgb::from_hex(0x4DD2FF))
            .with_rule(LiquidBehavior::new())
            .with_grain(true),
        ElementDefinition::new(NAME_WOOD, ElementClass::Rigid, Rgb::from_hex(0x59442D)),
    ]
}

fn behavior_from_str(s: &str) -> Result<Arc<dyn Behavior + Send + Sync>, EngineError> {
    match s {
        "powder" => Ok(Arc::new(PowderBehavior::new())),
        "liquid" => Ok(Arc::new(LiquidBehavior::new())),
        _ => Err(EngineError::UnknownBehavior(s.to_string())),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentManifest<'a> {
    format_version: u32,
    elements: Vec<ContentManifestElement<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentManifestElement<'a> {
    id: ElementId,
    name: &'a str,
    class: ElementClass,
    color: Rgb,
    grain: bool,
    animated: bool,
    hidden: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    elements: Vec<BundleElement>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleElement {
    name: String,
    class: String,
    /// Packed 0xRRGGBB.
    color: u32,
    #[serde(default)]
    behavior: Option<String>,
    #[serde(default)]
    grain: Option<bool>,
}

impl BundleElement {
    fn into_definition(self) -> Result<ElementDefinition, EngineError> {
        let class =
            ElementClass::from_name(&self.class).ok_or(EngineError::UnknownClass(self.class))?;

        let mut def = ElementDefinition::new(self.name, class, Rgb::from_hex(self.color));
        if let Some(kind) = self.behavior.as_deref() {
            def = def.with_shared_rule(behavior_from_str(kind)?);
        }
        if let Some(grain) = self.grain {
            def = def.with_grain(grain);
        }
        Ok(def)
    }
}
