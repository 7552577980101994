/**
 * mutation.rs
 * Triple and label mutation payloads
 *
 * Payload fields are raw strings; the mutation service interprets them.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::LabelError;
use crate::term::Triple;

/// Predicate used for label mutations, resolved server side
pub const LABEL_PREDICATE: &str = "rdfs:label";

static LANGUAGE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{1,8}(-[A-Za-z0-9]{1,8})*$").expect("language tag pattern is valid")
});

/// Triple-shaped request body for create and delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriplePayload {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl TriplePayload {
    /// Passthrough of the three raw terms; no formatting applied.
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Payload identifying an existing row by its exact field values
    pub fn from_triple(triple: &Triple) -> Self {
        Self::new(
            triple.subject.as_str(),
            triple.predicate.as_str(),
            triple.object.as_str(),
        )
    }

    /// `(focus, rdfs:label, object)` for a validated draft
    ///
    /// # Example
    /// ```
    /// use triple_lens::{LabelDraft, TriplePayload};
    ///
    /// let draft = LabelDraft::with_language("Robert", "en");
    /// let payload = TriplePayload::label("http://ex.org/Bob", &draft);
    /// assert_eq!(payload.predicate, "rdfs:label");
    /// assert_eq!(payload.object, "\"Robert\"@en");
    /// ```
    pub fn label(focus: &str, draft: &LabelDraft) -> Self {
        Self::new(focus, LABEL_PREDICATE, draft.object_value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelAnnotation {
    Plain,
    Language(String),
    Datatype(String),
}

/// A label value with at most one of language tag or datatype.
///
/// The enum makes "both set" unrepresentable; build one through
/// [`LabelForm::validate`] when the input comes from a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDraft {
    value: String,
    annotation: LabelAnnotation,
}

impl LabelDraft {
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            annotation: LabelAnnotation::Plain,
        }
    }

    pub fn with_language(value: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            annotation: LabelAnnotation::Language(tag.into()),
        }
    }

    pub fn with_datatype(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            annotation: LabelAnnotation::Datatype(datatype.into()),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn annotation(&self) -> &LabelAnnotation {
        &self.annotation
    }

    /// Object term sent to the mutation service
    pub fn object_value(&self) -> String {
        match &self.annotation {
            LabelAnnotation::Plain => self.value.clone(),
            LabelAnnotation::Language(tag) => format!("\"{}\"@{}", self.value, tag),
            LabelAnnotation::Datatype(dt) => format!("\"{}\"^^{}", self.value, dt),
        }
    }
}

/// Raw label input as entered: each annotation has an on/off flag and a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelForm {
    pub value: String,
    pub use_lang: bool,
    pub lang: String,
    pub use_datatype: bool,
    pub datatype: String,
}

impl LabelForm {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn lang(mut self, tag: impl Into<String>) -> Self {
        self.use_lang = true;
        self.lang = tag.into();
        self
    }

    pub fn datatype(mut self, datatype: impl Into<String>) -> Self {
        self.use_datatype = true;
        self.datatype = datatype.into();
        self
    }

    /// Check the form against the current focus and build a draft.
    ///
    /// Both flags on is rejected first, whatever the field contents.
    pub fn validate(&self, focus: Option<&str>) -> Result<LabelDraft, LabelError> {
        self.checked(focus).map(|(_, draft)| draft)
    }

    /// Validate and build the `(focus, rdfs:label, object)` payload
    pub fn payload(&self, focus: Option<&str>) -> Result<TriplePayload, LabelError> {
        let (focus, draft) = self.checked(focus)?;
        Ok(TriplePayload::label(focus, &draft))
    }

    fn checked<'f>(&self, focus: Option<&'f str>) -> Result<(&'f str, LabelDraft), LabelError> {
        if self.use_lang && self.use_datatype {
            return Err(LabelError::LanguageAndDatatype);
        }
        if self.value.trim().is_empty() {
            return Err(LabelError::EmptyLabel);
        }
        let focus = match focus {
            Some(focus) if !focus.trim().is_empty() => focus,
            _ => return Err(LabelError::MissingFocus),
        };

        if self.use_lang {
            let tag = self.lang.trim();
            if tag.is_empty() {
                return Err(LabelError::MissingLanguageTag);
            }
            if !LANGUAGE_TAG.is_match(tag) {
                return Err(LabelError::InvalidLanguageTag(tag.to_string()));
            }
            return Ok((focus, LabelDraft::with_language(self.value.clone(), tag)));
        }

        if self.use_datatype {
            let datatype = self.datatype.trim();
            if datatype.is_empty() {
                return Err(LabelError::MissingDatatype);
            }
            return Ok((focus, LabelDraft::with_datatype(self.value.clone(), datatype)));
        }

        Ok((focus, LabelDraft::plain(self.value.clone())))
    }
}
