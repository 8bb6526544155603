//! Fuzz target: inbound modem text through `AtDriver::read_inbound`
//!
//! Feeds arbitrary bytes as the modem's reply and checks that the text is
//! capped and NUL-cut, and that classification agrees with a direct scan.
//!
//! cargo fuzz run fuzz_inbound_classify

#![no_main]

use burglar_alarm::app::commands::RemoteCommand;
use burglar_alarm::app::ports::ModemPort;
use burglar_alarm::config::AlarmConfig;
use burglar_alarm::modem::{AtDriver, INBOUND_MAX_LEN};
use embedded_hal::delay::DelayNs;
use libfuzzer_sys::fuzz_target;

struct Replay<'a>(&'a [u8]);

impl ModemPort for Replay<'_> {
    type Error = ();

    fn write(&mut self, data: &[u8]) -> Result<usize, ()> {
        Ok(data.len())
    }

    fn read(&mut self, buf: &mut [u8], _timeout_ms: u32) -> Result<usize, ()> {
        let n = self.0.len().min(buf.len());
        buf[..n].copy_from_slice(&self.0[..n]);
        Ok(n)
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

fuzz_target!(|data: &[u8]| {
    let mut at = AtDriver::new(Replay(data), &AlarmConfig::default());
    let msg = at.read_inbound(&mut NoDelay);

    let text = msg.as_bytes();
    assert!(text.len() <= INBOUND_MAX_LEN);
    assert!(!text.contains(&0), "text must stop at the first NUL");
    assert!(data.starts_with(text));

    assert_eq!(msg.command(), RemoteCommand::classify(text));
});
