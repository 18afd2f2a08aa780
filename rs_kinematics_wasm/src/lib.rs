// rs_kinematics_wasm/src/lib.rs
// Browser bindings: a simulator driven by requestAnimationFrame and the calculators.

use wasm_bindgen::prelude::*;
use js_sys::{Array, Function, Object};
use web_sys::console;
use rs_kinematics::apis::easy_kinematics::EasyKinematics;
use rs_kinematics::calculators::{CalculationResult, Values};
use rs_kinematics::motion::{CircularParticle, KinematicState};
use rs_kinematics::simulation::{CallbackId, HostScheduler, Simulator};
use rs_kinematics::utils::SimulationConfig;

#[wasm_bindgen]
pub struct WasmSimulator {
    simulator: Simulator<HostScheduler>,
    subscriptions: Vec<(u32, CallbackId)>,
    next_subscription: u32,
}

#[wasm_bindgen]
impl WasmSimulator {
    /// Creates a simulator with the default particle centered on the canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<WasmSimulator, JsValue> {
        let config = SimulationConfig::default();
        let mut simulator = Simulator::with_default_particle(HostScheduler::new(), &config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        simulator.resize(width, height).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { simulator, subscriptions: Vec::new(), next_subscription: 0 })
    }

    #[wasm_bindgen]
    pub fn start(&mut self) {
        self.simulator.start();
    }

    #[wasm_bindgen]
    pub fn pause(&mut self) {
        self.simulator.pause();
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.simulator.reset();
    }

    /// Feeds one animation frame. `timestamp_ms` is the value handed to the
    /// `requestAnimationFrame` callback. Returns whether the simulator wants
    /// another frame.
    #[wasm_bindgen]
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        if let Some(tick) = self.simulator.scheduler_mut().fire(timestamp_ms / 1000.0) {
            self.simulator.on_tick(tick);
        }
        self.simulator.is_running()
    }

    #[wasm_bindgen]
    pub fn set_parameters(&mut self, radius: f64, angular_velocity: f64, initial_angle: Option<f64>) -> Result<(), JsValue> {
        self.simulator.set_parameters(radius, angular_velocity, initial_angle)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn set_mcua_parameters(
        &mut self,
        radius: f64,
        initial_angular_velocity: f64,
        angular_acceleration: f64,
        initial_angle: Option<f64>,
    ) -> Result<(), JsValue> {
        self.simulator.set_mcua_parameters(radius, initial_angular_velocity, angular_acceleration, initial_angle)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn toggle_vectors(&mut self) -> bool {
        self.simulator.toggle_vectors()
    }

    #[wasm_bindgen]
    pub fn toggle_trail(&mut self) -> bool {
        self.simulator.toggle_trail()
    }

    #[wasm_bindgen(getter)]
    pub fn show_vectors(&self) -> bool {
        self.simulator.display_options().show_vectors
    }

    #[wasm_bindgen(getter)]
    pub fn show_trail(&self) -> bool {
        self.simulator.display_options().show_trail
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.simulator.resize(width, height).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Particle fill color, `None` before a particle exists.
    #[wasm_bindgen(getter)]
    pub fn color(&self) -> Option<String> {
        self.simulator.particle().map(|particle| particle.color().to_string())
    }

    #[wasm_bindgen(setter)]
    pub fn set_color(&mut self, color: String) {
        if let Some(particle) = self.simulator.particle_mut() {
            particle.set_color(color);
        }
    }

    #[wasm_bindgen(getter)]
    pub fn elapsed_time(&self) -> f64 {
        self.simulator.elapsed_time()
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.simulator.is_running()
    }

    #[wasm_bindgen]
    pub fn current_state(&self) -> Option<WasmKinematicState> {
        self.simulator.current_state().map(WasmKinematicState)
    }

    /// Trail as a flat `[x0, y0, x1, y1, ...]` array, oldest first.
    #[wasm_bindgen]
    pub fn trail(&self) -> Vec<f64> {
        self.simulator.trail().flat_map(|point| [point.x, point.y]).collect()
    }

    /// Calls `callback(state)` after every frame. Returns an id for `remove_update_callback`.
    #[wasm_bindgen]
    pub fn on_update(&mut self, callback: Function) -> u32 {
        let id = self.simulator.on_update(move |particle: &CircularParticle, elapsed: f64| {
            let state = WasmKinematicState(particle.state(elapsed));
            callback
                .call1(&JsValue::NULL, &JsValue::from(state))
                .map(|_| ())
                .map_err(|e| format!("{:?}", e).into())
        });
        let subscription = self.next_subscription;
        self.next_subscription += 1;
        self.subscriptions.push((subscription, id));
        subscription
    }

    #[wasm_bindgen]
    pub fn remove_update_callback(&mut self, subscription: u32) -> bool {
        match self.subscriptions.iter().position(|(key, _)| *key == subscription) {
            Some(index) => {
                let (_, id) = self.subscriptions.remove(index);
                self.simulator.remove_update_callback(id)
            }
            None => false,
        }
    }
}

#[wasm_bindgen]
pub struct WasmKinematicState(KinematicState);

#[wasm_bindgen]
impl WasmKinematicState {
    #[wasm_bindgen(getter)]
    pub fn time(&self) -> f64 {
        self.0.time
    }

    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> f64 {
        self.0.angle
    }

    #[wasm_bindgen(getter)]
    pub fn angular_velocity(&self) -> f64 {
        self.0.angular_velocity
    }

    #[wasm_bindgen(getter)]
    pub fn angular_acceleration(&self) -> f64 {
        self.0.angular_acceleration
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.0.position.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.0.position.y
    }

    #[wasm_bindgen(getter)]
    pub fn velocity_x(&self) -> f64 {
        self.0.velocity.x
    }

    #[wasm_bindgen(getter)]
    pub fn velocity_y(&self) -> f64 {
        self.0.velocity.y
    }

    #[wasm_bindgen(getter)]
    pub fn speed(&self) -> f64 {
        self.0.velocity.magnitude
    }

    #[wasm_bindgen(getter)]
    pub fn centripetal_x(&self) -> f64 {
        self.0.centripetal_acceleration.x
    }

    #[wasm_bindgen(getter)]
    pub fn centripetal_y(&self) -> f64 {
        self.0.centripetal_acceleration.y
    }

    #[wasm_bindgen(getter)]
    pub fn centripetal_acceleration(&self) -> f64 {
        self.0.centripetal_acceleration.magnitude
    }

    #[wasm_bindgen(getter)]
    pub fn tangential_acceleration(&self) -> f64 {
        self.0.tangential_acceleration.magnitude
    }

    #[wasm_bindgen(getter)]
    pub fn total_acceleration(&self) -> f64 {
        self.0.total_acceleration.magnitude
    }
}

#[wasm_bindgen]
pub struct WasmCalculator {
    calculator: EasyKinematics,
}

#[wasm_bindgen]
impl WasmCalculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { calculator: EasyKinematics::new() }
    }

    /// Resolves `target` from a plain object of inputs such as
    /// `{ linear_velocity: 10, angular_velocity: "2" }`. Empty strings, `null`
    /// and `undefined` count as missing; `0` is a value.
    #[wasm_bindgen]
    pub fn resolve(&self, target: &str, inputs: &Object) -> WasmCalculationResult {
        let values = values_from_object(inputs);
        let result = self.calculator.resolve(target, &values);
        if let Some(error) = result.error() {
            console::warn_1(&JsValue::from_str(&format!("{}: {}", target, error)));
        }
        WasmCalculationResult(result)
    }

    #[wasm_bindgen]
    pub fn targets(&self) -> Array {
        self.calculator.targets().into_iter().map(JsValue::from_str).collect()
    }
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn values_from_object(inputs: &Object) -> Values {
    let mut values = Values::new();
    for entry in Object::entries(inputs).iter() {
        let pair = Array::from(&entry);
        let Some(name) = pair.get(0).as_string() else { continue };
        let raw = pair.get(1);
        let value = raw
            .as_f64()
            .or_else(|| raw.as_string().and_then(|text| text.trim().parse::<f64>().ok()));
        values.insert_optional(name, value);
    }
    values
}

#[wasm_bindgen]
pub struct WasmCalculationResult(CalculationResult);

#[wasm_bindgen]
impl WasmCalculationResult {
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> Option<f64> {
        self.0.value()
    }

    #[wasm_bindgen(getter)]
    pub fn success(&self) -> bool {
        self.0.is_success()
    }

    #[wasm_bindgen(getter)]
    pub fn unit(&self) -> String {
        self.0.unit().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.0.name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn formula(&self) -> String {
        self.0.formula().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn method_used(&self) -> Option<String> {
        self.0.method_used().map(str::to_string)
    }

    #[wasm_bindgen(getter)]
    pub fn error_kind(&self) -> Option<String> {
        self.0.error().map(|e| e.kind.as_str().to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn error_message(&self) -> Option<String> {
        self.0.error().map(|e| e.message.clone())
    }

    #[wasm_bindgen(getter)]
    pub fn suggestions(&self) -> Array {
        self.0
            .error()
            .map(|e| e.suggestions.iter().map(|s| JsValue::from_str(s)).collect())
            .unwrap_or_else(Array::new)
    }

    #[wasm_bindgen(getter)]
    pub fn warnings(&self) -> Array {
        self.0.warnings().iter().map(|w| JsValue::from_str(w)).collect()
    }

    #[wasm_bindgen(getter)]
    pub fn available_methods(&self) -> Array {
        self.0.available_methods().iter().map(|m| JsValue::from_str(m)).collect()
    }
}
