use crate::utils::TransitionConfig;

/// Ordered list of CSS declarations.
///
/// Setting a property that is already present overwrites its value in place,
/// so merging keeps the first-insertion order of the left-hand side.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        let index = self.declarations.iter().position(|(p, _)| p == property)?;
        Some(self.declarations.remove(index).1)
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn merge(mut self, other: &Style) -> Self {
        for (property, value) in &other.declarations {
            self.set(property.clone(), value.clone());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Inline `style` attribute value
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (property, value) in iter {
            style.set(property, value);
        }
        style
    }
}

pub fn default_backdrop_style() -> Style {
    Style::from_iter([
        ("position", "fixed"),
        ("top", "0"),
        ("right", "0"),
        ("bottom", "0"),
        ("left", "0"),
        ("z-index", "999"),
        ("display", "flex"),
        ("justify-content", "center"),
        ("align-items", "center"),
        ("height", "100%"),
        ("width", "100%"),
        ("background-color", "rgba(0, 0, 0, 0.6)"),
        // Safari
        ("-webkit-backdrop-filter", "blur(2px)"),
        ("backdrop-filter", "blur(2px)"),
        ("opacity", "0"),
        ("pointer-events", "none"),
        ("overflow", "hidden"),
    ])
}

pub fn backdrop_transition_style(transition: &TransitionConfig) -> Style {
    Style::new().with("transition", transition.css())
}

pub fn backdrop_visible_style() -> Style {
    Style::from_iter([("opacity", "1"), ("pointer-events", "auto")])
}

pub fn default_dialog_style() -> Style {
    Style::from_iter([
        ("display", "flex"),
        ("flex-direction", "column"),
        ("gap", "16px"),
        ("padding", "8px 16px"),
        ("background-color", "white"),
        ("border-radius", "8px"),
        ("user-select", "none"),
    ])
}

/// Caller overrides for one surface
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SurfaceOptions {
    pub style: Option<Style>,
    pub class: Option<String>,
}

impl SurfaceOptions {
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    // An empty class name does not count as an override.
    fn has_class(&self) -> bool {
        self.class.as_deref().is_some_and(|c| !c.is_empty())
    }

    pub fn class_attr(&self) -> String {
        self.class.clone().unwrap_or_default()
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct PresentationOptions {
    pub backdrop: SurfaceOptions,
    pub dialog: SurfaceOptions,
}

/// Explicit style > class name > built-in default. The transition is layered
/// on top in every case so timed animation survives a full override.
pub fn compose_backdrop_style(
    options: &SurfaceOptions,
    transition: &TransitionConfig,
    visible: bool,
) -> Style {
    let transition_style = backdrop_transition_style(transition);

    if let Some(style) = &options.style {
        return style.clone().merge(&transition_style);
    }

    if options.has_class() {
        return transition_style;
    }

    let style = default_backdrop_style().merge(&transition_style);
    if visible {
        style.merge(&backdrop_visible_style())
    } else {
        style
    }
}

pub fn compose_dialog_style(options: &SurfaceOptions) -> Style {
    if let Some(style) = &options.style {
        return style.clone();
    }

    if options.has_class() {
        return Style::new();
    }

    default_dialog_style()
}
