//! WASM API for the emulator core.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection,
//! memory access and Language Card state.

use wasm_bindgen::prelude::*;

use crate::{Apple2Memory, CpuConfig, MliContext, ReadBus, WriteBus, CPU};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<crate::EmulatorError> for JsError {
    fn from(err: crate::EmulatorError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// MLI context that forwards `(call_number, param_block)` to a JavaScript
/// function and uses its return value as the status byte.
///
/// The callback cannot see emulated memory while it runs; anything it needs
/// must be read with `read_memory` before stepping.
struct JsMliContext {
    handler: js_sys::Function,
}

impl MliContext for JsMliContext {
    fn dispatch(&mut self, _memory: &mut Apple2Memory, call_number: u8, param_block: u16) -> u8 {
        let result = self.handler.call2(
            &JsValue::NULL,
            &JsValue::from(call_number),
            &JsValue::from(param_block),
        );
        match result.ok().and_then(|v| v.as_f64()) {
            Some(status) => status as u8,
            None => crate::mli::ERR_IO_ERROR,
        }
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct EmulatorApple2 {
    cpu: CPU<JsMliContext>,
}

#[wasm_bindgen]
impl EmulatorApple2 {
    /// Create an emulator whose MLI calls are handled by `on_mli(call, param)`.
    #[wasm_bindgen(constructor)]
    pub fn new(on_mli: js_sys::Function) -> Self {
        let config = CpuConfig::default().with_capture_cout(true);
        let mut cpu = CPU::with_config(Apple2Memory::new(), config);
        cpu.attach_mli(JsMliContext { handler: on_mli });
        EmulatorApple2 { cpu }
    }

    /// Execute a single instruction and return its cycle count
    pub fn step(&mut self) -> Result<u32, JsError> {
        Ok(self.cpu.step()?)
    }

    /// Execute up to `max_instructions` and return how many ran
    pub fn run(&mut self, max_instructions: u32) -> Result<u32, JsError> {
        Ok(self.cpu.run(max_instructions as u64)? as u32)
    }

    /// Reset the CPU; memory and LC state are kept
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Install a 12KB ROM image at $D000-$FFFF
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), JsError> {
        Ok(self.cpu.memory_mut().load_rom(rom)?)
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    #[wasm_bindgen(getter)]
    pub fn stopped(&self) -> bool {
        self.cpu.is_stopped()
    }

    #[wasm_bindgen(getter)]
    pub fn waiting(&self) -> bool {
        self.cpu.is_waiting()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Language Card state
    #[wasm_bindgen(getter)]
    pub fn lc_read_enabled(&self) -> bool {
        self.cpu.memory().is_lc_read_enabled()
    }

    #[wasm_bindgen(getter)]
    pub fn lc_write_enabled(&self) -> bool {
        self.cpu.memory().is_lc_write_enabled()
    }

    #[wasm_bindgen(getter)]
    pub fn lc_bank1(&self) -> bool {
        self.cpu.memory().is_lc_bank1()
    }

    // Memory access methods

    /// Read a byte through the read bus (no soft-switch side effects)
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a byte through the write bus (no soft-switch side effects)
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256).map(|i| self.cpu.memory().read(start + i)).collect()
    }

    /// Load a program into memory and set PC
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        for (i, &byte) in program.iter().enumerate() {
            let addr = start_addr.wrapping_add(i as u16);
            self.cpu.memory_mut().write(addr, byte);
        }
        self.cpu.set_pc(start_addr);
    }

    /// Drain text printed through COUT
    pub fn take_output(&mut self) -> String {
        self.cpu.take_cout()
    }

    /// Control-flow trace, newest first
    pub fn trace(&self) -> String {
        self.cpu.trace().to_string()
    }
}
