//! Records embedded in structured text

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ResponsiveImage;

/// Wire name of the image block record type
pub const IMAGE_BLOCK_TYPENAME: &str = "ImageBlockRecord";

/// Field carrying the record type
const TYPENAME_FIELD: &str = "__typename";

/// A block embedded in structured text, tagged by its `__typename`
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Image(ImageBlock),
    /// Any record type without a dedicated rendering
    Unknown(UnknownBlock),
}

impl Block {
    /// Record id, if the block carries one
    pub fn id(&self) -> Option<&str> {
        match self {
            Block::Image(image) => Some(&image.id),
            Block::Unknown(other) => other.id(),
        }
    }

    /// Record type name as sent by the content service
    pub fn typename(&self) -> &str {
        match self {
            Block::Image(_) => IMAGE_BLOCK_TYPENAME,
            Block::Unknown(other) => &other.typename,
        }
    }
}

/// An image embedded in a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub id: String,
    /// Not checked at decode time; a missing image is reported when rendering
    #[serde(default)]
    pub image: Option<ImageAsset>,
}

impl ImageBlock {
    /// The responsive rendering of the image, if the record has one
    pub fn responsive_image(&self) -> Option<&ResponsiveImage> {
        self.image
            .as_ref()
            .and_then(|image| image.responsive_image.as_ref())
    }
}

/// Upload field of an image block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    #[serde(default)]
    pub responsive_image: Option<ResponsiveImage>,
}

/// A block of a type this renderer does not know
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownBlock {
    pub typename: String,
    /// The full record, `__typename` included
    pub payload: Map<String, Value>,
}

impl UnknownBlock {
    pub fn id(&self) -> Option<&str> {
        self.payload.get("id").and_then(Value::as_str)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let payload = Map::<String, Value>::deserialize(deserializer)?;
        let typename = payload
            .get(TYPENAME_FIELD)
            .and_then(Value::as_str)
            .ok_or_else(|| <D::Error as de::Error>::missing_field(TYPENAME_FIELD))?
            .to_string();

        if typename == IMAGE_BLOCK_TYPENAME {
            let image =
                ImageBlock::deserialize(Value::Object(payload)).map_err(<D::Error as de::Error>::custom)?;
            Ok(Block::Image(image))
        } else {
            Ok(Block::Unknown(UnknownBlock { typename, payload }))
        }
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Block::Image(image) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry(TYPENAME_FIELD, IMAGE_BLOCK_TYPENAME)?;
                map.serialize_entry("id", &image.id)?;
                map.serialize_entry("image", &image.image)?;
                map.end()
            }
            Block::Unknown(other) => other.payload.serialize(serializer),
        }
    }
}
