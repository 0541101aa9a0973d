//! Object content type.

use bytes::Bytes;

/// Binary payload of a stored object together with its content type.
///
/// The payload is fully buffered. Cloning is cheap and never exposes
/// mutable state shared with a backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectContent {
	data: Bytes,
	content_type: Option<String>,
}

impl ObjectContent {
	/// Create content without a content type.
	pub fn new(data: impl Into<Bytes>) -> Self {
		Self {
			data: data.into(),
			content_type: None,
		}
	}

	/// Set the content type (e.g. `text/plain`).
	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = Some(content_type.into());
		self
	}

	/// Payload bytes.
	pub fn data(&self) -> &Bytes {
		&self.data
	}

	/// Content type, if known.
	pub fn content_type(&self) -> Option<&str> {
		self.content_type.as_deref()
	}

	/// Payload size in bytes.
	pub fn size(&self) -> usize {
		self.data.len()
	}

	/// Same as [`ObjectContent::size`].
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns `true` for a zero-length payload.
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Consume the content and return the payload.
	pub fn into_bytes(self) -> Bytes {
		self.data
	}
}

impl From<Vec<u8>> for ObjectContent {
	fn from(data: Vec<u8>) -> Self {
		Self::new(data)
	}
}

impl From<&'static [u8]> for ObjectContent {
	fn from(data: &'static [u8]) -> Self {
		Self::new(Bytes::from_static(data))
	}
}

impl From<&'static str> for ObjectContent {
	fn from(data: &'static str) -> Self {
		Self::new(Bytes::from_static(data.as_bytes()))
	}
}

impl From<Bytes> for ObjectContent {
	fn from(data: Bytes) -> Self {
		Self::new(data)
	}
}
