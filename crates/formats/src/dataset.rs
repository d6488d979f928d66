//! In-memory COCO dataset
//!
//! The whole file is parsed in one shot. Top-level fields other than
//! `annotations` are carried along untouched and written back in their
//! original order.

use crate::{Annotation, Error, Result};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

pub const ANNOTATIONS: &str = "annotations";

/// A COCO dataset held fully in memory
#[derive(Debug, Clone)]
pub struct CocoDataset {
    /// Top-level object; the `annotations` slot is emptied while the
    /// annotations live in `annotations`
    root: Map<String, Value>,
    /// Annotation records in file order
    pub annotations: Vec<Annotation>,
}

impl CocoDataset {
    /// Read and parse a COCO file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening COCO file: {:?}", path);

        let file = File::open(path)?;
        let value: Value = serde_json::from_reader(BufReader::new(file))?;
        Self::from_value(value)
    }

    /// Build a dataset from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        let mut root = match value {
            Value::Object(map) => map,
            other => {
                return Err(Error::InvalidFile(format!(
                    "expected a JSON object at the top level, got {}",
                    type_name(&other)
                )))
            }
        };

        // Take the array out in place so the key keeps its position
        let annotations = match root.get_mut(ANNOTATIONS).map(Value::take) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(Error::InvalidFile(format!(
                    "'{}' must be a list, got {}",
                    ANNOTATIONS,
                    type_name(&other)
                )))
            }
            None => {
                return Err(Error::InvalidFile(format!(
                    "missing top-level '{}' field",
                    ANNOTATIONS
                )))
            }
        };

        let annotations = annotations
            .into_iter()
            .enumerate()
            .map(|(index, data)| Annotation::new(data, index))
            .collect::<Vec<_>>();

        debug!("Loaded {} annotations", annotations.len());

        Ok(Self { root, annotations })
    }

    /// Number of annotations currently held
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Look up a pass-through top-level field
    pub fn field(&self, name: &str) -> Option<&Value> {
        if name == ANNOTATIONS {
            return None;
        }
        self.root.get(name)
    }

    /// Replace the annotation sequence, leaving every other field alone
    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    /// Reassemble the full JSON document
    pub fn into_value(self) -> Value {
        let mut root = self.root;
        let annotations = self
            .annotations
            .into_iter()
            .map(Annotation::into_value)
            .collect();
        root.insert(ANNOTATIONS.to_string(), Value::Array(annotations));
        Value::Object(root)
    }

    /// Serialize the dataset to `path` with 2-space indentation
    pub fn write_pretty<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!("Writing COCO file: {:?}", path);

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &self.into_value())?;
        writer.flush()?;
        Ok(())
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
