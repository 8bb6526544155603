//! One-shot hardware peripheral initialization and register helpers.
//!
//! Configures the PIR input, the status LED output and the modem UART
//! using raw ESP-IDF sys calls.  Called once from `main()` before the poll
//! loop starts; any failure is fatal.
//!
//! On host targets the helpers are backed by an in-memory pin bank so the
//! drivers above them behave consistently in tests.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    UartInstallFailed(i32),
    UartConfigFailed(i32),
    UartPinFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc)  => write!(f, "GPIO config failed (rc={})", rc),
            Self::UartInstallFailed(rc) => write!(f, "UART driver install failed (rc={})", rc),
            Self::UartConfigFailed(rc)  => write!(f, "UART param config failed (rc={})", rc),
            Self::UartPinFailed(rc)     => write!(f, "UART pin assignment failed (rc={})", rc),
        }
    }
}

impl std::error::Error for HwInitError {}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the poll loop; single-threaded.
    unsafe {
        init_pir()?;
        init_status_led()?;
        init_modem_uart()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── GPIO ──────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_pir() -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::PIR_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }

    info!("hw_init: PIR input on GPIO{}", pins::PIR_GPIO);
    Ok(())
}

#[cfg(target_os = "espidf")]
unsafe fn init_status_led() -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::STATUS_LED_GPIO,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
    // Boot disarmed: LED off.
    unsafe { gpio_set_level(pins::STATUS_LED_GPIO, 0) };

    info!("hw_init: status LED on GPIO{}", pins::STATUS_LED_GPIO);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe to call from main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_status_led(). Main-loop only.
    unsafe { gpio_set_level(pin, u32::from(high)); }
}

#[cfg(not(target_os = "espidf"))]
static SIM_PIN_LEVELS: core::sync::atomic::AtomicU64 = core::sync::atomic::AtomicU64::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(pin: i32) -> bool {
    SIM_PIN_LEVELS.load(core::sync::atomic::Ordering::Relaxed) & (1u64 << pin) != 0
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(pin: i32, high: bool) {
    use core::sync::atomic::Ordering;
    if high {
        SIM_PIN_LEVELS.fetch_or(1u64 << pin, Ordering::Relaxed);
    } else {
        SIM_PIN_LEVELS.fetch_and(!(1u64 << pin), Ordering::Relaxed);
    }
}

/// Drive a simulated input line (e.g. the PIR) from host code.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_input(pin: i32, high: bool) {
    gpio_write(pin, high);
}

// ── UART (modem) ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_modem_uart() -> Result<(), HwInitError> {
    let cfg = uart_config_t {
        baud_rate: pins::MODEM_BAUD_RATE as i32,
        data_bits: uart_word_length_t_UART_DATA_8_BITS,
        parity: uart_parity_t_UART_PARITY_DISABLE,
        stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
        flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
        ..Default::default()
    };

    // RX ring only: no TX buffer, no event queue, default interrupt flags.
    let ret = unsafe {
        uart_driver_install(
            pins::MODEM_UART_PORT,
            pins::MODEM_RX_RING_SIZE,
            0,
            0,
            core::ptr::null_mut(),
            0,
        )
    };
    if ret != ESP_OK as i32 { return Err(HwInitError::UartInstallFailed(ret)); }

    let ret = unsafe { uart_param_config(pins::MODEM_UART_PORT, &cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::UartConfigFailed(ret)); }

    let ret = unsafe {
        uart_set_pin(
            pins::MODEM_UART_PORT,
            pins::MODEM_TX_GPIO,
            pins::MODEM_RX_GPIO,
            pins::MODEM_PIN_NO_CHANGE,
            pins::MODEM_PIN_NO_CHANGE,
        )
    };
    if ret != ESP_OK as i32 { return Err(HwInitError::UartPinFailed(ret)); }

    info!(
        "hw_init: UART{} at {} 8N1 (tx=GPIO{}, rx=GPIO{})",
        pins::MODEM_UART_PORT, pins::MODEM_BAUD_RATE, pins::MODEM_TX_GPIO, pins::MODEM_RX_GPIO
    );
    Ok(())
}

/// Queue bytes on a UART.  Returns the byte count or the negative driver code.
#[cfg(target_os = "espidf")]
pub fn uart_write(port: i32, data: &[u8]) -> Result<usize, i32> {
    // SAFETY: the driver was installed in init_modem_uart(); `data` outlives
    // the call because uart_write_bytes copies into the FIFO before returning.
    let ret = unsafe { uart_write_bytes(port, data.as_ptr().cast(), data.len()) };
    if ret < 0 { Err(ret) } else { Ok(ret as usize) }
}

/// Wait up to `timeout_ms` and read whatever bytes have arrived.
#[cfg(target_os = "espidf")]
pub fn uart_read(port: i32, buf: &mut [u8], timeout_ms: u32) -> Result<usize, i32> {
    let ticks = (u64::from(timeout_ms) * u64::from(configTICK_RATE_HZ) / 1000) as TickType_t;
    // SAFETY: `buf` is a valid, exclusively borrowed region of `buf.len()`
    // bytes; main-loop only.
    let ret = unsafe { uart_read_bytes(port, buf.as_mut_ptr().cast(), buf.len() as u32, ticks) };
    if ret < 0 { Err(ret) } else { Ok(ret as usize) }
}

#[cfg(not(target_os = "espidf"))]
pub fn uart_write(_port: i32, data: &[u8]) -> Result<usize, i32> {
    Ok(data.len())
}

#[cfg(not(target_os = "espidf"))]
pub fn uart_read(_port: i32, _buf: &mut [u8], _timeout_ms: u32) -> Result<usize, i32> {
    Ok(0)
}
