use std::collections::BTreeMap;

use crate::foundation::error::{VizError, VizResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
/// Node identity. Two entries carrying the same id are the same node.
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Current value of a node property, as seen by the inspector.
pub enum PropertyValue {
    /// Single numeric value (opacity, mix, ...).
    Scalar(f64),
    /// Numeric vector (color, position, ...).
    Vector(Vec<f64>),
    /// Anything the inspector has no control for.
    Other(serde_json::Value),
}

/// Property table keyed by property name.
pub type Properties = BTreeMap<String, PropertyValue>;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One time-bound animation of a property, in seconds.
pub struct TransitionInterval {
    /// Animation start.
    pub start: f64,
    /// Animation end.
    pub end: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// What a source node decodes; drives the timeline track palette.
pub enum MediaKind {
    /// Video element.
    Video,
    /// Still image.
    Image,
    /// Canvas element.
    Canvas,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A media input placed on the global timeline.
pub struct SourceNode {
    /// Node identity.
    pub id: NodeId,
    /// Media kind tag.
    pub media: MediaKind,
    /// Timeline start in seconds.
    pub start_time: f64,
    /// Timeline stop in seconds (`>= start_time`).
    pub stop_time: f64,
    /// Inspector-visible properties.
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Processing node variants.
pub enum ProcessingKind {
    /// Generic effect node.
    Effect,
    /// Node compositing several inputs onto one output.
    Compositing,
    /// Node animating properties over explicit time intervals.
    Transition {
        /// Intervals per animated property, in scheduling order.
        #[serde(default)]
        transitions: BTreeMap<String, Vec<TransitionInterval>>,
    },
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A node transforming one or more inputs.
pub struct ProcessingNode {
    /// Node identity.
    pub id: NodeId,
    /// Processing variant.
    pub kind: ProcessingKind,
    /// Inspector-visible properties.
    #[serde(default)]
    pub properties: Properties,
}

impl ProcessingNode {
    /// Transition schedule, if this is a transition-kind node.
    pub fn transitions(&self) -> Option<&BTreeMap<String, Vec<TransitionInterval>>> {
        match &self.kind {
            ProcessingKind::Transition { transitions } => Some(transitions),
            ProcessingKind::Effect | ProcessingKind::Compositing => None,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// The sink where composed output is presented.
pub struct DestinationNode {
    /// Node identity.
    pub id: NodeId,
    /// Inspector-visible properties.
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Directed edge in the render graph. Duplicates are legal.
pub struct Connection {
    /// Upstream node.
    pub source: NodeId,
    /// Downstream node.
    pub destination: NodeId,
}

impl Connection {
    pub fn new(source: NodeId, destination: NodeId) -> Self {
        Self {
            source,
            destination,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Read-only view of the render graph for one visualization call.
pub struct GraphSnapshot {
    /// Source nodes; their order defines graph rows and timeline lanes.
    pub sources: Vec<SourceNode>,
    /// Processing nodes, in no particular order.
    #[serde(default)]
    pub processing: Vec<ProcessingNode>,
    /// The single destination node.
    pub destination: DestinationNode,
    /// Graph edges.
    #[serde(default)]
    pub connections: Vec<Connection>,
    /// Timeline duration in seconds.
    pub duration: f64,
}

impl GraphSnapshot {
    pub fn from_json_str(s: &str) -> VizResult<Self> {
        serde_json::from_str(s).map_err(|e| VizError::serde(e.to_string()))
    }

    pub fn to_json_string_pretty(&self) -> VizResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| VizError::serde(e.to_string()))
    }

    /// Structural checks for snapshots loaded from disk.
    ///
    /// Render calls do not require this; they only guard their own preconditions.
    pub fn validate(&self) -> VizResult<()> {
        if !self.duration.is_finite() {
            return Err(VizError::validation("duration must be finite"));
        }
        for s in &self.sources {
            if !s.start_time.is_finite() || !s.stop_time.is_finite() {
                return Err(VizError::validation(format!(
                    "source {} has non-finite start/stop time",
                    s.id
                )));
            }
            if s.stop_time < s.start_time {
                return Err(VizError::validation(format!(
                    "source {} stop_time must be >= start_time",
                    s.id
                )));
            }
        }
        for p in &self.processing {
            let Some(transitions) = p.transitions() else {
                continue;
            };
            for (property, intervals) in transitions {
                if intervals
                    .iter()
                    .any(|iv| !iv.start.is_finite() || !iv.end.is_finite())
                {
                    return Err(VizError::validation(format!(
                        "transition node {} property '{property}' has a non-finite interval",
                        p.id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Transition-kind processing nodes with their schedules, in snapshot order.
    pub fn transition_nodes(
        &self,
    ) -> impl Iterator<Item = (NodeId, &BTreeMap<String, Vec<TransitionInterval>>)> + '_ {
        self.processing
            .iter()
            .filter_map(|p| p.transitions().map(|t| (p.id, t)))
    }

    /// Total number of transition intervals across all properties of all transition nodes.
    pub fn transition_interval_count(&self) -> usize {
        self.transition_nodes()
            .flat_map(|(_, t)| t.values())
            .map(Vec::len)
            .sum()
    }

    /// Property table of the first node carrying `id` (destination, sources, processing).
    pub fn properties(&self, id: NodeId) -> Option<&Properties> {
        if self.destination.id == id {
            return Some(&self.destination.properties);
        }
        if let Some(s) = self.sources.iter().find(|s| s.id == id) {
            return Some(&s.properties);
        }
        self.processing
            .iter()
            .find(|p| p.id == id)
            .map(|p| &p.properties)
    }

    pub fn properties_mut(&mut self, id: NodeId) -> Option<&mut Properties> {
        if self.destination.id == id {
            return Some(&mut self.destination.properties);
        }
        if let Some(s) = self.sources.iter_mut().find(|s| s.id == id) {
            return Some(&mut s.properties);
        }
        self.processing
            .iter_mut()
            .find(|p| p.id == id)
            .map(|p| &mut p.properties)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/model.rs"]
mod tests;
