//! AT sequencer tests through the public `modem` API.

use burglar_alarm::config::AlarmConfig;
use burglar_alarm::error::ModemError;
use burglar_alarm::modem::{AtDriver, ReadStatus, at};

use crate::mock_hw::{MockDelay, MockModem};

fn driver() -> AtDriver<MockModem> {
    AtDriver::new(MockModem::default(), &AlarmConfig::default())
}

#[test]
fn custom_sequence_is_written_in_order() {
    let mut link = driver();
    let mut delay = MockDelay::default();

    link.run_sequence(&[at::ATTENTION, at::READ_SLOT_1], &mut delay)
        .unwrap();

    assert_eq!(link.modem().wire(), ["AT\r\n", "AT+CMGR=1\r\n"]);
    assert_eq!(delay.calls, vec![500, 500]);
}

#[test]
fn settle_time_follows_config() {
    let config = AlarmConfig {
        at_settle_ms: 50,
        ..AlarmConfig::default()
    };
    let mut at = AtDriver::new(MockModem::default(), &config);
    let mut delay = MockDelay::default();

    at.send_notification(&mut delay).unwrap();
    assert_eq!(delay.calls, vec![50; 5]);
}

#[test]
fn custom_recipient_is_addressed() {
    let mut config = AlarmConfig::default();
    config.recipient.clear();
    config.recipient.push_str("+15550100").unwrap();
    config.body.clear();
    config.body.push_str("Door opened").unwrap();

    let mut at = AtDriver::new(MockModem::default(), &config);
    at.send_notification(&mut MockDelay::default()).unwrap();

    let wire = at.modem().wire();
    assert_eq!(wire[2], "AT+CMGS=\"+15550100\"\r\n");
    assert_eq!(wire[3], "Door opened\r\n");
    assert_eq!(at.recipient().as_str(), "+15550100");
}

#[test]
fn reply_with_status_lines_still_carries_command() {
    let mut at = driver();
    at.modem_mut()
        .reply("\r\n+CMGR: \"REC READ\",\"+358401234567\",,\"24/01/01,12:00:00+08\"\r\nTurn? TURN ON\r\n\r\nOK\r\n");

    let msg = at.read_inbound(&mut MockDelay::default());
    assert_eq!(msg.status(), ReadStatus::Received);
    assert!(msg.text_lossy().contains("REC READ"));
    assert!(msg.command().is_some());
}

#[test]
fn write_fault_reports_first_failing_step() {
    let mut at = driver();
    at.modem_mut().fail_writes = true;
    let mut delay = MockDelay::default();

    let res = at.delete_stored_message(&mut delay);
    assert_eq!(res, Err(ModemError::WriteFailed { step: 0 }));
    // Pacing is kept even when the link is down.
    assert_eq!(delay.calls.len(), 3);
}

#[test]
fn write_fault_on_check_still_reads() {
    let mut at = driver();
    at.modem_mut().fail_writes = true;
    at.modem_mut().reply("TURN OFF");

    let msg = at.read_inbound(&mut MockDelay::default());
    assert_eq!(msg.fault(), Some(ModemError::WriteFailed { step: 0 }));
    assert_eq!(msg.as_bytes(), b"TURN OFF");
}
