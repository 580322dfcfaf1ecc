use bytemuck::Zeroable;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spacetime_core::config::SimulationConfig;
use spacetime_core::factory::BodyFactory;
use spacetime_core::lattice::Lattice;
use spacetime_core::scene::{default_lattice, three_body_preset};
use spacetime_core::simulation::Simulation;
use wasm_bindgen::prelude::*;

mod console_logger;

/// GPU-compatible body struct: 32 bytes, matches WGSL Body
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuBody {
    position: [f32; 3], // 12 bytes
    radius: f32,        //  4 bytes
    velocity: [f32; 3], // 12 bytes
    emitter: f32,       //  4 bytes, 1.0 for light sources
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct SpacetimeWorld {
    sim: Simulation,
    base_lattice: Lattice,
    lattice: Lattice,
    body_buffer: Vec<GpuBody>,
}

#[wasm_bindgen]
impl SpacetimeWorld {
    /// Preset three-body scene with default constants.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SpacetimeWorld, JsValue> {
        Self::build(three_body_preset().map_err(to_js_error)?, SimulationConfig::default())
    }

    /// Preset scene with constants read from a JSON object; missing keys keep their defaults.
    #[wasm_bindgen]
    pub fn with_config(config_json: &str) -> Result<SpacetimeWorld, JsValue> {
        let config: SimulationConfig = serde_json::from_str(config_json).map_err(to_js_error)?;
        Self::build(three_body_preset().map_err(to_js_error)?, config)
    }

    /// `count` randomly placed bodies from the default factory.
    #[wasm_bindgen]
    pub fn random(count: usize, seed: u32) -> Result<SpacetimeWorld, JsValue> {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let bodies = BodyFactory::default()
            .generate(count, &mut rng)
            .map_err(to_js_error)?;
        Self::build(bodies, SimulationConfig::default())
    }

    /// Advance one step and refresh both GPU buffers. Returns elapsed milliseconds.
    #[wasm_bindgen]
    pub fn step(&mut self) -> f32 {
        let start = js_sys::Date::now();
        let resetting = self.sim.reset_pending();
        self.sim.step();
        if resetting {
            log::info!("SpacetimeWorld reset");
        }
        self.lattice = self.sim.resample(&self.base_lattice);
        self.write_body_output();
        let elapsed = js_sys::Date::now() - start;
        elapsed as f32
    }

    #[wasm_bindgen]
    pub fn request_reset(&mut self) {
        self.sim.request_reset();
    }

    #[wasm_bindgen]
    pub fn set_collisions(&mut self, enabled: bool) {
        self.sim.config.collisions_enabled = enabled;
    }

    #[wasm_bindgen]
    pub fn body_count(&self) -> usize {
        self.sim.bodies.len()
    }

    #[wasm_bindgen]
    pub fn get_body_buffer_ptr(&self) -> *const f32 {
        self.body_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_body_buffer_byte_length(&self) -> usize {
        self.body_buffer.len() * std::mem::size_of::<GpuBody>()
    }

    #[wasm_bindgen]
    pub fn get_lattice_ptr(&self) -> *const u8 {
        self.lattice.as_bytes().as_ptr()
    }

    #[wasm_bindgen]
    pub fn get_lattice_byte_length(&self) -> usize {
        self.lattice.as_bytes().len()
    }

    #[wasm_bindgen]
    pub fn lattice_vertex_count(&self) -> usize {
        self.lattice.len()
    }

    /// Flat `[x, y, z, ...]` of every emitter, for light uniforms.
    #[wasm_bindgen]
    pub fn emitter_positions(&self) -> Vec<f32> {
        self.sim
            .emitter_positions()
            .iter()
            .flat_map(|p| p.to_array())
            .collect()
    }
}

impl SpacetimeWorld {
    fn build(bodies: Vec<spacetime_core::Body>, config: SimulationConfig) -> Result<SpacetimeWorld, JsValue> {
        console_logger::init();
        log::info!("SpacetimeWorld created: {} bodies", bodies.len());

        let sim = Simulation::new(bodies, config);
        let base_lattice = default_lattice().map_err(to_js_error)?;
        let lattice = sim.resample(&base_lattice);
        let body_buffer = vec![GpuBody::zeroed(); sim.bodies.len()];

        let mut world = SpacetimeWorld {
            sim,
            base_lattice,
            lattice,
            body_buffer,
        };
        world.write_body_output();
        Ok(world)
    }

    fn write_body_output(&mut self) {
        self.body_buffer.resize(self.sim.bodies.len(), GpuBody::zeroed());
        for (slot, body) in self.body_buffer.iter_mut().zip(&self.sim.bodies) {
            *slot = GpuBody {
                position: body.position.to_array(),
                radius: body.radius,
                velocity: body.velocity.to_array(),
                emitter: if body.is_emitter { 1.0 } else { 0.0 },
            };
        }
    }
}
