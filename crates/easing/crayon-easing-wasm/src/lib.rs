use js_sys::Float32Array;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use crayon_easing_core::{Config, EasingCurve, Tween};

const MAX_COMPONENTS: usize = 4;
/// Upper bound on `sample_curve` output length.
pub const MAX_SAMPLES: u32 = 1 << 16;

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Accepts an easing name (`"CubicInOut"`), a control-point string
/// (`"0.25,0.1,0.25,1"`) or a 4-element array of control points.
fn curve_from_js(curve: &JsValue) -> Result<EasingCurve, JsError> {
    if jsvalue_is_undefined_or_null(curve) {
        return Ok(EasingCurve::default());
    }
    if let Some(s) = curve.as_string() {
        return EasingCurve::parse(&s).map_err(|e| JsError::new(&e.to_string()));
    }
    swb::from_value(curve.clone()).map_err(|e| JsError::new(&format!("curve error: {e}")))
}

fn config_from_js(config: &JsValue) -> Result<Config, JsError> {
    let cfg: Config = if jsvalue_is_undefined_or_null(config) {
        Config::default()
    } else {
        swb::from_value(config.clone()).map_err(|e| JsError::new(&format!("config error: {e}")))?
    };
    cfg.validate().map_err(|e| JsError::new(&e.to_string()))?;
    Ok(cfg)
}

fn pad(values: &[f32], what: &str) -> Result<[f32; MAX_COMPONENTS], JsError> {
    if values.is_empty() || values.len() > MAX_COMPONENTS {
        return Err(JsError::new(&format!(
            "{what} must have 1 to {MAX_COMPONENTS} components, got {}",
            values.len()
        )));
    }
    let mut out = [0.0; MAX_COMPONENTS];
    out[..values.len()].copy_from_slice(values);
    Ok(out)
}

/// Eased progress for a named easing.
#[wasm_bindgen]
pub fn evaluate(easing: &str, t: f32) -> Result<f32, JsError> {
    match EasingCurve::parse(easing).map_err(|e| JsError::new(&e.to_string()))? {
        EasingCurve::Named(e) => Ok(crayon_easing_core::evaluate(e, t)),
        EasingCurve::Bezier(_) => Err(JsError::new(
            "evaluate expects an easing name; use evaluate_custom for control points",
        )),
    }
}

/// Eased progress for a `"p1x,p1y,p2x,p2y"` cubic-bezier curve.
#[wasm_bindgen(js_name = evaluate_custom)]
pub fn evaluate_custom(spec: &str, t: f32) -> Result<f32, JsError> {
    crayon_easing_core::evaluate_custom_str(spec, t).map_err(|e| JsError::new(&e.to_string()))
}

/// Sample a curve at `count` evenly spaced points over [0,1].
/// `count` is limited to `MAX_SAMPLES`.
#[wasm_bindgen(js_name = sample_curve)]
pub fn sample_curve(curve: JsValue, count: u32) -> Result<Float32Array, JsError> {
    if count > MAX_SAMPLES {
        return Err(JsError::new(&format!(
            "sample_curve count {count} exceeds the limit of {MAX_SAMPLES}"
        )));
    }
    let curve = curve_from_js(&curve)?;
    let out: Vec<f32> = match count {
        0 => Vec::new(),
        1 => vec![curve.sample(0.0)],
        n => (0..n)
            .map(|i| curve.sample(i as f32 / (n - 1) as f32))
            .collect(),
    };
    Ok(Float32Array::from(out.as_slice()))
}

/// Frame-stepped tween over 1 to 4 float components.
#[wasm_bindgen]
pub struct CrayonTween {
    core: Tween<[f32; MAX_COMPONENTS]>,
    len: usize,
}

#[wasm_bindgen]
impl CrayonTween {
    /// Create a tween. `curve` is a name, control-point string or array;
    /// `config` is an optional JSON object matching `Config`.
    /// Example:
    ///   new CrayonTween([0, 0, 0], [0, 5, 0], 3.0, "CubicInOut")
    #[wasm_bindgen(constructor)]
    pub fn new(
        start: &[f32],
        end: &[f32],
        duration: f32,
        curve: JsValue,
        config: JsValue,
    ) -> Result<CrayonTween, JsError> {
        console_error_panic_hook::set_once();

        if start.len() != end.len() {
            return Err(JsError::new(&format!(
                "start has {} components but end has {}",
                start.len(),
                end.len()
            )));
        }
        let cfg = config_from_js(&config)?;
        let curve = match curve_from_js(&curve)? {
            EasingCurve::Bezier(c) => EasingCurve::Bezier(c.solver_config(cfg.solver)),
            named => named,
        };
        let core = Tween::new(pad(start, "start")?, pad(end, "end")?, duration, curve)
            .with_config(cfg.tween);
        Ok(CrayonTween {
            core,
            len: start.len(),
        })
    }

    /// Step by dt seconds and return the value for this frame.
    #[wasm_bindgen]
    pub fn advance(&mut self, dt: f32) -> Float32Array {
        let step = self.core.advance(dt);
        self.to_js(&step.value())
    }

    /// Value at an absolute elapsed time; does not change the stepping state.
    #[wasm_bindgen]
    pub fn sample(&self, elapsed: f32) -> Float32Array {
        self.to_js(&self.core.sample(elapsed))
    }

    #[wasm_bindgen(js_name = is_finished)]
    pub fn is_finished(&self) -> bool {
        self.core.is_finished()
    }

    #[wasm_bindgen]
    pub fn progress(&self) -> f32 {
        self.core.progress()
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.core.reset();
    }
}

impl CrayonTween {
    fn to_js(&self, value: &[f32; MAX_COMPONENTS]) -> Float32Array {
        Float32Array::from(&value[..self.len])
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
