//! Scene record types
//!
//! A `SceneRecord` is one immutable step of a deck. Records are built once
//! (from a deck file or the built-in table) and never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::SceneError;

/// Label used for the advance action when a deck does not provide one.
pub const DEFAULT_BUTTON_TEXT: &str = "Continue";

/// Opaque reference to an image resource.
///
/// The reference is resolved by whatever displays it; the scene core never
/// opens or decodes the file behind it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the reference points anywhere at all.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Final path component, for compact display.
    pub fn file_name(&self) -> &str {
        self.0.rsplit(['/', '\\']).next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A titled block of supplementary content shown below the narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoBox {
    pub title: String,
    pub content: String,
}

impl InfoBox {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// One scene of a linear narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneRecord {
    title: String,
    description: String,
    factoid: String,
    image: ImageRef,
    button_text: String,
    info_boxes: Vec<InfoBox>,
}

impl SceneRecord {
    /// Create a record with the required narrative fields.
    ///
    /// Fails when `title` or `description` is blank. Optional fields start
    /// empty and are filled with the `with_*` builders.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image: ImageRef,
    ) -> Result<Self, SceneError> {
        let title = title.into();
        let description = description.into();

        if title.trim().is_empty() {
            return Err(SceneError::MissingField { field: "title" });
        }
        if description.trim().is_empty() {
            return Err(SceneError::MissingField {
                field: "description",
            });
        }

        Ok(Self {
            title,
            description,
            factoid: String::new(),
            image,
            button_text: DEFAULT_BUTTON_TEXT.to_string(),
            info_boxes: Vec::new(),
        })
    }

    pub fn with_factoid(mut self, factoid: impl Into<String>) -> Self {
        self.factoid = factoid.into();
        self
    }

    /// Set the advance label. A blank label keeps the default.
    pub fn with_button_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.trim().is_empty() {
            self.button_text = text;
        }
        self
    }

    pub fn with_info_boxes(mut self, boxes: Vec<InfoBox>) -> Self {
        self.info_boxes = boxes;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The annotation text, or `None` when the record has no factoid.
    pub fn factoid(&self) -> Option<&str> {
        if self.factoid.is_empty() {
            None
        } else {
            Some(&self.factoid)
        }
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn button_text(&self) -> &str {
        &self.button_text
    }

    pub fn info_boxes(&self) -> &[InfoBox] {
        &self.info_boxes
    }
}
