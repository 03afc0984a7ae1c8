//! UI components discovered by scanners.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::identifiers::create_component_id;

/// Where a component was found. Tagged by `type` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ComponentSource {
    React {
        path: String,
        export_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line: Option<u32>,
    },
    Vue {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line: Option<u32>,
    },
    Svelte {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line: Option<u32>,
    },
    Angular {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        selector: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line: Option<u32>,
    },
    WebComponent {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tag_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line: Option<u32>,
    },
    Template {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        template_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line: Option<u32>,
    },
    Figma {
        file_key: String,
        node_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    Storybook {
        story_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

impl ComponentSource {
    /// The JSON `type` tag of this source.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::React { .. } => "react",
            Self::Vue { .. } => "vue",
            Self::Svelte { .. } => "svelte",
            Self::Angular { .. } => "angular",
            Self::WebComponent { .. } => "webcomponent",
            Self::Template { .. } => "template",
            Self::Figma { .. } => "figma",
            Self::Storybook { .. } => "storybook",
        }
    }

    /// File-system independent locator used for identity.
    pub fn locator(&self) -> String {
        match self {
            Self::React { path, .. }
            | Self::Vue { path, .. }
            | Self::Svelte { path, .. }
            | Self::Angular { path, .. }
            | Self::WebComponent { path, .. }
            | Self::Template { path, .. } => path.clone(),
            Self::Figma { file_key, node_id, .. } => format!("{file_key}/{node_id}"),
            Self::Storybook { story_id, .. } => story_id.clone(),
        }
    }

    /// Human-facing location, `path:line` for code sources.
    pub fn location(&self) -> String {
        let (path, line) = match self {
            Self::React { path, line, .. }
            | Self::Vue { path, line }
            | Self::Svelte { path, line }
            | Self::Angular { path, line, .. }
            | Self::WebComponent { path, line, .. }
            | Self::Template { path, line, .. } => (path, line),
            Self::Figma { .. } | Self::Storybook { .. } => {
                return format!("{}:{}", self.kind(), self.locator());
            }
        };
        match line {
            Some(l) => format!("{path}:{l}"),
            None => path.clone(),
        }
    }

    /// True for design-tool sources (Figma, Storybook) as opposed to code.
    pub fn is_design(&self) -> bool {
        matches!(self, Self::Figma { .. } | Self::Storybook { .. })
    }

    /// "design" or "code", used in orphan messages.
    pub fn side_label(&self) -> &'static str {
        if self.is_design() {
            "design"
        } else {
            "code"
        }
    }
}

/// A component prop as declared in source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub prop_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropDefinition {
    pub fn new(name: impl Into<String>, prop_type: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            prop_type: prop_type.into(),
            required,
            default_value: None,
            description: None,
        }
    }
}

/// A named variant (e.g. `primary`) with its prop presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDefinition {
    pub name: String,
    #[serde(default)]
    pub props: BTreeMap<String, Value>,
}

/// Kind of a literal value found where a token was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HardcodedKind {
    Color,
    Spacing,
    FontSize,
    FontFamily,
    Shadow,
    Border,
    Other,
}

impl HardcodedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Spacing => "spacing",
            Self::FontSize => "fontSize",
            Self::FontFamily => "fontFamily",
            Self::Shadow => "shadow",
            Self::Border => "border",
            Self::Other => "other",
        }
    }

    /// Plural noun used in messages ("3 hardcoded colors").
    pub fn plural_label(&self) -> &'static str {
        match self {
            Self::Color => "colors",
            Self::Spacing => "spacing values",
            Self::FontSize => "font sizes",
            Self::FontFamily => "font families",
            Self::Shadow => "shadows",
            Self::Border => "border values",
            Self::Other => "values",
        }
    }
}

/// One literal occurrence, e.g. `color: #ff0000` at `Button.tsx:12`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardcodedValue {
    #[serde(rename = "type")]
    pub kind: HardcodedKind,
    pub value: String,
    pub property: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityInfo {
    #[serde(default)]
    pub issues: Vec<String>,
}

/// Free-form scanner findings attached to a component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentMetadata {
    pub deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<AccessibilityInfo>,
    pub hardcoded_values: Vec<HardcodedValue>,
}

/// A UI component discovered in one source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub name: String,
    pub source: ComponentSource,
    #[serde(default)]
    pub props: Vec<PropDefinition>,
    #[serde(default)]
    pub variants: Vec<VariantDefinition>,
    /// Token ids referenced by this component.
    #[serde(default)]
    pub tokens: Vec<String>,
    /// Names of other components or libraries used.
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub metadata: ComponentMetadata,
    pub scanned_at: DateTime<Utc>,
}

impl Component {
    /// Create a component with an id derived from its source and name.
    pub fn new(name: impl Into<String>, source: ComponentSource, scanned_at: DateTime<Utc>) -> Self {
        let name = name.into();
        Self {
            id: create_component_id(&source, &name),
            name,
            source,
            props: Vec::new(),
            variants: Vec::new(),
            tokens: Vec::new(),
            dependencies: Vec::new(),
            metadata: ComponentMetadata::default(),
            scanned_at,
        }
    }

    /// Look up a prop by case-insensitive name.
    pub fn prop(&self, name: &str) -> Option<&PropDefinition> {
        self.props.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn accessibility_issues(&self) -> &[String] {
        self.metadata
            .accessibility
            .as_ref()
            .map(|a| a.issues.as_slice())
            .unwrap_or(&[])
    }
}
