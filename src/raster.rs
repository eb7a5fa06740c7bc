//! Off-screen canvas surface and the PNG images it produces.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{DashboardError, Result, js_error};

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Pixel dimensions of a render target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
	pub width: u32,
	pub height: u32,
}

impl CanvasSize {
	pub const fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	pub fn width_f64(self) -> f64 {
		self.width as f64
	}

	pub fn height_f64(self) -> f64 {
		self.height as f64
	}
}

/// A rendered PNG image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
	pub size: CanvasSize,
	pub png: Vec<u8>,
}

impl RasterImage {
	/// Decodes a `data:image/png;base64,...` URL as produced by
	/// `HtmlCanvasElement::toDataURL`.
	pub fn from_data_url(size: CanvasSize, url: &str) -> Result<Self> {
		let payload = url
			.strip_prefix(PNG_DATA_URL_PREFIX)
			.ok_or_else(|| DashboardError::Image("not a PNG data URL".into()))?;
		let png = STANDARD
			.decode(payload)
			.map_err(|e| DashboardError::Image(e.to_string()))?;
		Ok(Self { size, png })
	}

	/// Encodes the image as a data URL for `<img src>`.
	pub fn data_url(&self) -> String {
		format!("{PNG_DATA_URL_PREFIX}{}", STANDARD.encode(&self.png))
	}
}

/// A detached `<canvas>` with its 2D context.
pub struct Canvas {
	element: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	size: CanvasSize,
}

impl Canvas {
	/// Creates a canvas that is never attached to the DOM, cleared to white.
	pub fn new(size: CanvasSize) -> Result<Self> {
		let document = web_sys::window()
			.and_then(|w| w.document())
			.ok_or_else(|| DashboardError::Js {
				context: "create canvas",
				message: "no document".into(),
			})?;
		let element: HtmlCanvasElement = document
			.create_element("canvas")
			.map_err(js_error("create canvas"))?
			.dyn_into()
			.map_err(js_error("create canvas"))?;
		element.set_width(size.width);
		element.set_height(size.height);

		let ctx: CanvasRenderingContext2d = element
			.get_context("2d")
			.map_err(js_error("get 2d context"))?
			.ok_or_else(|| DashboardError::Js {
				context: "get 2d context",
				message: "2d context unavailable".into(),
			})?
			.dyn_into()
			.map_err(js_error("get 2d context"))?;

		ctx.set_fill_style_str("#ffffff");
		ctx.fill_rect(0.0, 0.0, size.width_f64(), size.height_f64());

		Ok(Self { element, ctx, size })
	}

	pub fn context(&self) -> &CanvasRenderingContext2d {
		&self.ctx
	}

	pub fn size(&self) -> CanvasSize {
		self.size
	}

	/// Serializes the canvas to PNG.
	pub fn into_image(self) -> Result<RasterImage> {
		let url = self
			.element
			.to_data_url_with_type("image/png")
			.map_err(js_error("encode canvas"))?;
		RasterImage::from_data_url(self.size, &url)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn data_url_round_trip() {
		let image = RasterImage {
			size: CanvasSize::new(2, 1),
			png: vec![0x89, b'P', b'N', b'G'],
		};
		let url = image.data_url();
		assert!(url.starts_with("data:image/png;base64,"));
		assert_eq!(RasterImage::from_data_url(image.size, &url).unwrap(), image);
	}

	#[test]
	fn rejects_other_data_urls() {
		let err = RasterImage::from_data_url(CanvasSize::new(1, 1), "data:image/jpeg;base64,AAAA");
		assert!(matches!(err, Err(DashboardError::Image(_))));
	}
}
