#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_precision_loss)]

pub mod geom;
pub mod strip;

use std::fmt;

use geom::StripParameters;
use serde::Serialize;
use strip::MobiusStrip;
use wasm_bindgen::prelude::*;

pub use geom::{StripError, StripMesh};
pub use strip::StripReport;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
#[wasm_bindgen]
pub async fn initialize_parallel(worker_count: Option<u32>) -> Result<(), JsError> {
    let threads = worker_count
        .map(|count| count.max(1) as usize)
        .or_else(|| {
            std::thread::available_parallelism()
                .map(|value| value.get())
                .ok()
        })
        .unwrap_or(1);

    wasm_bindgen_rayon::init_thread_pool(threads)
        .await
        .map_err(|err| JsError::new(&format!("could not start rayon thread pool: {err}")))
}

#[macro_export]
macro_rules! debug_log {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug_logs")]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($t)*)));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                println!("{}", format!($($t)*));
            }
        }
    }};
}

#[derive(Debug, Serialize)]
struct MeshExport {
    rows: usize,
    cols: usize,
    x: Vec<Vec<f64>>,
    y: Vec<Vec<f64>>,
    z: Vec<Vec<f64>>,
}

impl From<&StripMesh> for MeshExport {
    fn from(mesh: &StripMesh) -> Self {
        let (rows, cols) = mesh.shape();
        let (x, y, z) = mesh.components();
        Self {
            rows,
            cols,
            x: x.to_rows(),
            y: y.to_rows(),
            z: z.to_rows(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TriangleMeshExport {
    positions: Vec<f64>,
    indices: Vec<u32>,
    uvs: Vec<f64>,
    normals: Vec<f64>,
}

/// Public entry point for JavaScript consumers.
#[wasm_bindgen]
pub struct StripEngine {
    strip: MobiusStrip,
}

#[wasm_bindgen]
impl StripEngine {
    /// Builds a strip from centre radius, width and per-axis sample count.
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f64, width: f64, resolution: u32) -> Result<StripEngine, JsValue> {
        Self::from_parameters(StripParameters::new(radius, width, resolution as usize))
    }

    /// Builds a strip from a `{ radius, width, resolution }` object.
    #[wasm_bindgen]
    pub fn from_config(config: JsValue) -> Result<StripEngine, JsValue> {
        let params: StripParameters =
            serde_wasm_bindgen::from_value(config).map_err(to_js_error)?;
        Self::from_parameters(params)
    }

    #[wasm_bindgen]
    pub fn resolution(&self) -> u32 {
        u32::try_from(self.strip.parameters().resolution).unwrap_or(u32::MAX)
    }

    #[wasm_bindgen]
    pub fn surface_area(&self) -> f64 {
        self.strip.surface_area()
    }

    #[wasm_bindgen]
    pub fn edge_length(&self) -> f64 {
        self.strip.edge_length()
    }

    /// The point mesh as nested `x`, `y`, `z` arrays indexed `[v][u]`.
    #[wasm_bindgen]
    pub fn get_mesh(&self) -> Result<JsValue, JsValue> {
        let export = MeshExport::from(self.strip.mesh());
        serde_wasm_bindgen::to_value(&export).map_err(to_js_error)
    }

    /// Flat buffers ready for a WebGL/three.js `BufferGeometry`.
    #[wasm_bindgen]
    pub fn get_triangle_mesh(&self) -> Result<JsValue, JsValue> {
        let mesh = self.strip.triangle_mesh();
        mesh.validate().map_err(|err| js_error(&err))?;

        let export = TriangleMeshExport {
            positions: mesh.positions.iter().flatten().copied().collect(),
            indices: mesh.indices,
            uvs: mesh.uvs.unwrap_or_default().iter().flatten().copied().collect(),
            normals: mesh.normals.unwrap_or_default().iter().flatten().copied().collect(),
        };
        serde_wasm_bindgen::to_value(&export).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn get_report(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.strip.report()).map_err(to_js_error)
    }
}

impl StripEngine {
    fn from_parameters(params: StripParameters) -> Result<StripEngine, JsValue> {
        debug_log!(
            "StripEngine R={} w={} n={}",
            params.radius,
            params.width,
            params.resolution
        );
        let strip = MobiusStrip::from_parameters(params).map_err(to_js_error)?;
        Ok(StripEngine { strip })
    }

    /// The underlying strip, for native callers.
    #[must_use]
    pub fn strip(&self) -> &MobiusStrip {
        &self.strip
    }
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}
