//! Integration tests for the AlarmMonitor → AtDriver → modem pipeline.
//!
//! Each test drives whole poll cycles against the mock adapters and checks
//! the resulting state, LED level, modem wire traffic and delay pacing.

use burglar_alarm::app::commands::RemoteCommand;
use burglar_alarm::app::events::AlarmEvent;
use burglar_alarm::app::service::AlarmMonitor;
use burglar_alarm::config::{AlarmConfig, RECIPIENT_NUMBER};
use burglar_alarm::error::ModemError;
use burglar_alarm::fsm::AlarmState;

use crate::mock_hw::{MockHardware, MockModem, RecordingSink, TestMonitor, clear, make_monitor};

const CHECK: [&str; 3] = ["AT\r\n", "AT+CMGF=1\r\n", "AT+CMGR=1\r\n"];
const DELETE: [&str; 3] = ["AT\r\n", "AT+CMGF=1\r\n", "AT+CMGD=1\r\n"];

fn arm(monitor: &mut TestMonitor, sink: &mut RecordingSink) {
    monitor.modem_mut().reply("TURN ON");
    assert_eq!(monitor.poll_cycle(sink), AlarmState::Armed);
}

fn trigger(monitor: &mut TestMonitor, sink: &mut RecordingSink) {
    arm(monitor, sink);
    monitor.hardware_mut().motion = true;
    assert_eq!(monitor.poll_cycle(sink), AlarmState::Triggered);
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn starts_disarmed_with_led_off() {
    let (monitor, sink) = make_monitor();

    assert_eq!(monitor.state(), AlarmState::Disarmed);
    assert_eq!(monitor.hardware().led_writes, vec![false]);
    assert_eq!(sink.events, vec![AlarmEvent::Started(AlarmState::Disarmed)]);
    assert!(monitor.modem().writes.is_empty(), "start must not talk to the modem");
}

// ── Scenario: noise while disarmed ────────────────────────────

#[test]
fn noise_while_disarmed_only_checks_messages() {
    let (mut monitor, mut sink) = make_monitor();
    clear(&mut monitor, &mut sink);
    monitor.modem_mut().reply("random noise");

    assert_eq!(monitor.poll_cycle(&mut sink), AlarmState::Disarmed);

    assert_eq!(monitor.modem().wire(), CHECK);
    assert!(monitor.hardware().led_writes.is_empty());
    assert!(!monitor.hardware().led_on());
    assert_eq!(monitor.delay().calls, vec![500, 500, 500, 200, 5_000]);
    assert!(sink.events.is_empty());
}

// ── Scenario: arm ─────────────────────────────────────────────

#[test]
fn turn_on_arms_and_deletes_message() {
    let (mut monitor, mut sink) = make_monitor();
    clear(&mut monitor, &mut sink);
    monitor.modem_mut().reply("please TURN ON now");

    assert_eq!(monitor.poll_cycle(&mut sink), AlarmState::Armed);

    let mut expected: Vec<&str> = CHECK.to_vec();
    expected.extend(DELETE);
    assert_eq!(monitor.modem().wire(), expected);
    assert_eq!(monitor.hardware().led_writes, vec![true]);
    // read x3, settle, delete x3, settle, exchange settle, idle
    assert_eq!(
        monitor.delay().calls,
        vec![500, 500, 500, 200, 500, 500, 500, 200, 200, 5_000]
    );
    assert_eq!(
        sink.events,
        vec![
            AlarmEvent::CommandReceived(RemoteCommand::Arm),
            AlarmEvent::StateChanged {
                from: AlarmState::Disarmed,
                to: AlarmState::Armed
            },
        ]
    );
}

#[test]
fn repeated_turn_on_only_repeats_the_delete() {
    let (mut monitor, mut sink) = make_monitor();
    arm(&mut monitor, &mut sink);
    clear(&mut monitor, &mut sink);

    monitor.modem_mut().reply("TURN ON");
    assert_eq!(monitor.poll_cycle(&mut sink), AlarmState::Armed);

    let mut expected: Vec<&str> = CHECK.to_vec();
    expected.extend(DELETE);
    assert_eq!(monitor.modem().wire(), expected);
    assert_eq!(monitor.hardware().led_writes, vec![true]);
    assert_eq!(monitor.notifications_sent(), 0);
    // No state change event when re-arming an armed alarm.
    assert_eq!(sink.events, vec![AlarmEvent::CommandReceived(RemoteCommand::Arm)]);
}

// ── Scenario: motion while armed ──────────────────────────────

#[test]
fn motion_while_armed_sends_one_sms() {
    let (mut monitor, mut sink) = make_monitor();
    arm(&mut monitor, &mut sink);
    clear(&mut monitor, &mut sink);
    monitor.hardware_mut().motion = true;

    assert_eq!(monitor.poll_cycle(&mut sink), AlarmState::Triggered);

    let wire = monitor.modem().wire();
    assert_eq!(&wire[..3], CHECK);
    assert_eq!(wire[3], "AT\r\n");
    assert_eq!(wire[4], "AT+CMGF=1\r\n");
    assert_eq!(wire[5], format!("AT+CMGS=\"{}\"\r\n", RECIPIENT_NUMBER));
    assert!(wire[6].ends_with("\r\n"));
    assert_eq!(wire[7], "\u{1a}");
    assert_eq!(wire.len(), 8);

    assert_eq!(monitor.notifications_sent(), 1);
    // read x3, exchange settle, sms x5, trigger settle, idle
    assert_eq!(
        monitor.delay().calls,
        vec![500, 500, 500, 200, 500, 500, 500, 500, 500, 200, 5_000]
    );
    assert!(sink.events.contains(&AlarmEvent::StateChanged {
        from: AlarmState::Armed,
        to: AlarmState::Triggered
    }));
}

#[test]
fn sustained_motion_does_not_spam() {
    let (mut monitor, mut sink) = make_monitor();
    trigger(&mut monitor, &mut sink);
    clear(&mut monitor, &mut sink);

    for _ in 0..5 {
        assert_eq!(monitor.poll_cycle(&mut sink), AlarmState::Triggered);
    }

    assert_eq!(monitor.modem().sms_submitted(), 0);
    assert_eq!(monitor.notifications_sent(), 1);
    assert_eq!(monitor.hardware().motion_reads, 0, "PIR is not sampled once triggered");
}

#[test]
fn motion_while_disarmed_is_ignored() {
    let (mut monitor, mut sink) = make_monitor();
    monitor.hardware_mut().motion = true;

    for _ in 0..3 {
        assert_eq!(monitor.poll_cycle(&mut sink), AlarmState::Disarmed);
    }

    assert_eq!(monitor.modem().sms_submitted(), 0);
    assert_eq!(monitor.hardware().motion_reads, 0);
}

#[test]
fn arm_and_motion_in_the_same_cycle() {
    let (mut monitor, mut sink) = make_monitor();
    monitor.hardware_mut().motion = true;
    monitor.modem_mut().reply("TURN ON");

    assert_eq!(monitor.poll_cycle(&mut sink), AlarmState::Triggered);
    assert_eq!(monitor.modem().sms_submitted(), 1);
}

// ── Disarm ────────────────────────────────────────────────────

#[test]
fn turn_off_disarms_from_triggered() {
    let (mut monitor, mut sink) = make_monitor();
    trigger(&mut monitor, &mut sink);
    clear(&mut monitor, &mut sink);

    monitor.modem_mut().reply("+CMGR: \"REC UNREAD\"\r\nTURN OFF\r\nOK");
    assert_eq!(monitor.poll_cycle(&mut sink), AlarmState::Disarmed);

    assert_eq!(monitor.hardware().led_writes, vec![false]);
    assert_eq!(monitor.modem().count("AT+CMGD=1\r\n"), 1);
    assert_eq!(
        sink.events.last(),
        Some(&AlarmEvent::StateChanged {
            from: AlarmState::Triggered,
            to: AlarmState::Disarmed
        })
    );
}

#[test]
fn turn_on_rearms_after_trigger() {
    let (mut monitor, mut sink) = make_monitor();
    trigger(&mut monitor, &mut sink);
    monitor.hardware_mut().motion = false;

    monitor.modem_mut().reply("TURN ON");
    assert_eq!(monitor.poll_cycle(&mut sink), AlarmState::Armed);

    // A fresh arming period allows a fresh notification.
    monitor.hardware_mut().motion = true;
    assert_eq!(monitor.poll_cycle(&mut sink), AlarmState::Triggered);
    assert_eq!(monitor.notifications_sent(), 2);
}

#[test]
fn disarm_wins_over_arm_in_one_message() {
    let (mut monitor, mut sink) = make_monitor();
    arm(&mut monitor, &mut sink);

    monitor.modem_mut().reply("TURN ON TURN OFF");
    assert_eq!(monitor.poll_cycle(&mut sink), AlarmState::Disarmed);
    assert!(!monitor.hardware().led_on());
}

// ── Failure semantics ─────────────────────────────────────────

#[test]
fn read_failure_is_no_command() {
    let (mut monitor, mut sink) = make_monitor();
    arm(&mut monitor, &mut sink);
    clear(&mut monitor, &mut sink);
    monitor.modem_mut().fail_reads = true;

    assert_eq!(monitor.poll_cycle(&mut sink), AlarmState::Armed);
    assert_eq!(sink.events, vec![AlarmEvent::ModemFault(ModemError::ReadFailed)]);
    assert_eq!(monitor.modem().wire(), CHECK);
}

#[test]
fn write_failures_do_not_stop_the_alarm() {
    let (mut monitor, mut sink) = make_monitor();
    arm(&mut monitor, &mut sink);
    clear(&mut monitor, &mut sink);
    monitor.modem_mut().fail_writes = true;
    monitor.hardware_mut().motion = true;

    assert_eq!(monitor.poll_cycle(&mut sink), AlarmState::Triggered);
    // Every step is still attempted: 3 check + 5 sms.
    assert_eq!(monitor.modem().writes.len(), 8);
    assert!(
        sink.events
            .iter()
            .any(|e| matches!(e, AlarmEvent::ModemFault(ModemError::WriteFailed { step: 0 })))
    );
}

#[test]
fn garbled_bytes_are_no_command() {
    let (mut monitor, mut sink) = make_monitor();
    monitor
        .modem_mut()
        .replies
        .push_back(vec![0xff, b'T', b'U', 0x80, b'R', b'N', b' ', b'O', b'N']);

    assert_eq!(monitor.poll_cycle(&mut sink), AlarmState::Disarmed);
    assert_eq!(monitor.modem().count("AT+CMGD=1\r\n"), 0);
}

#[test]
fn cycles_are_counted() {
    let (mut monitor, mut sink) = make_monitor();
    for _ in 0..4 {
        monitor.poll_cycle(&mut sink);
    }
    assert_eq!(monitor.cycle_count(), 4);
    assert_eq!(monitor.delay().total_ms(), 4 * (3 * 500 + 200 + 5_000));
}

#[test]
fn worst_case_cycle_matches_recorded_delays() {
    let config = AlarmConfig::default();
    let mut monitor: TestMonitor = AlarmMonitor::new(
        &config,
        MockHardware {
            motion: true,
            ..Default::default()
        },
        MockModem::default(),
        Default::default(),
    );
    let mut sink = RecordingSink::default();
    monitor.start(&mut sink);

    // An arming message plus motion in the same cycle takes every branch.
    monitor.modem_mut().reply("TURN ON");
    assert_eq!(monitor.poll_cycle(&mut sink), AlarmState::Triggered);

    // The read timeout is spent inside the UART driver, not the delay source.
    assert_eq!(
        monitor.delay().total_ms() + u64::from(config.read_timeout_ms),
        u64::from(config.worst_case_cycle_ms())
    );
}
