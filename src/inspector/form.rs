use crate::{
    foundation::error::{VizError, VizResult},
    graph::model::{Properties, PropertyValue},
};

/// Step used for per-element vector sliders.
pub const VECTOR_STEP: f64 = 0.01;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Which property value a slider writes to.
pub enum SliderBinding {
    Scalar { property: String },
    Element { property: String, index: usize },
}

impl SliderBinding {
    pub fn property(&self) -> &str {
        match self {
            Self::Scalar { property } | Self::Element { property, .. } => property,
        }
    }

    /// Write `value` (clamped to `[0, 1]`) into the bound property.
    ///
    /// Fails when the property is gone, changed shape, or the element index is out of range.
    pub fn apply(&self, properties: &mut Properties, value: f64) -> VizResult<()> {
        if !value.is_finite() {
            return Err(VizError::validation(format!(
                "slider value for '{}' must be finite",
                self.property()
            )));
        }
        let value = value.clamp(0.0, 1.0);

        match (self, properties.get_mut(self.property())) {
            (Self::Scalar { .. }, Some(PropertyValue::Scalar(v))) => {
                *v = value;
                Ok(())
            }
            (Self::Element { index, .. }, Some(PropertyValue::Vector(vs))) => {
                let len = vs.len();
                let slot = vs.get_mut(*index).ok_or_else(|| {
                    VizError::validation(format!(
                        "element {index} out of range for '{}' (len {len})",
                        self.property()
                    ))
                })?;
                *slot = value;
                Ok(())
            }
            (_, None) => Err(VizError::validation(format!(
                "property '{}' no longer exists",
                self.property()
            ))),
            (_, Some(_)) => Err(VizError::validation(format!(
                "property '{}' changed shape since the form was built",
                self.property()
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Slider {
    pub binding: SliderBinding,
    pub min: f64,
    pub max: f64,
    /// `None` lets the host pick its default granularity.
    pub step: Option<f64>,
    pub value: f64,
}

impl Slider {
    fn unit(binding: SliderBinding, step: Option<f64>, value: f64) -> Self {
        Self {
            binding,
            min: 0.0,
            max: 1.0,
            step,
            value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertySection {
    pub property: String,
    /// Empty for values the inspector cannot edit.
    pub sliders: Vec<Slider>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Host-agnostic description of the controls for one node's properties.
pub struct ControlForm {
    pub title: Option<String>,
    pub sections: Vec<PropertySection>,
}

impl ControlForm {
    pub fn slider_count(&self) -> usize {
        self.sections.iter().map(|s| s.sliders.len()).sum()
    }

    pub fn bindings(&self) -> impl Iterator<Item = &SliderBinding> + '_ {
        self.sections
            .iter()
            .flat_map(|s| s.sliders.iter().map(|sl| &sl.binding))
    }

    /// Route a slider change back into `properties`.
    ///
    /// `binding` must belong to this form; see [`SliderBinding::apply`] for the write itself.
    pub fn apply(
        &self,
        properties: &mut Properties,
        binding: &SliderBinding,
        value: f64,
    ) -> VizResult<()> {
        if !self.bindings().any(|b| b == binding) {
            return Err(VizError::validation(format!(
                "binding for '{}' is not part of this form",
                binding.property()
            )));
        }
        binding.apply(properties, value)
    }
}

/// Build the control form for a property table, one section per property in name order.
pub fn build_control_form(properties: &Properties, title: Option<&str>) -> ControlForm {
    let sections = properties
        .iter()
        .map(|(name, value)| {
            let sliders = match value {
                PropertyValue::Scalar(v) => vec![Slider::unit(
                    SliderBinding::Scalar {
                        property: name.clone(),
                    },
                    None,
                    *v,
                )],
                PropertyValue::Vector(vs) => vs
                    .iter()
                    .enumerate()
                    .map(|(index, v)| {
                        Slider::unit(
                            SliderBinding::Element {
                                property: name.clone(),
                                index,
                            },
                            Some(VECTOR_STEP),
                            *v,
                        )
                    })
                    .collect(),
                PropertyValue::Other(_) => Vec::new(),
            };
            PropertySection {
                property: name.clone(),
                sliders,
            }
        })
        .collect();

    ControlForm {
        title: title.map(str::to_owned),
        sections,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/inspector/form.rs"]
mod tests;
