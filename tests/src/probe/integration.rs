#![cfg(test)]
use std::net::Ipv4Addr;
use std::time::Duration;

use nbprobe_common::config::ProbeConfig;
use nbprobe_common::network::netbios::{HW_ADDR_UNKNOWN, ScanResult};
use nbprobe_common::signal::StopSignal;
use nbprobe_core::{ProbeError, probe};

use crate::responder::{self, FakeNameService, Replies};

const LOCALHOST: Ipv4Addr = Ipv4Addr::LOCALHOST;
const WAIT: Duration = Duration::from_millis(500);

fn config_for(service: &FakeNameService) -> ProbeConfig {
    ProbeConfig::default()
        .with_port(service.port())
        .with_timeout(Duration::from_millis(300))
}

fn workstation_status() -> Vec<u8> {
    responder::status_reply(
        &[
            ("WS01", 0x00, 0x0400),
            ("WS01", 0x20, 0x0400),
            ("CORP", 0x00, 0x8c00),
            ("CORP", 0x1e, 0x8c00),
            ("ALICE", 0x03, 0x0400),
        ],
        [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e],
    )
}

/// A workstation answering both queries hands over its full identity.
#[tokio::test]
async fn probe_learns_identity_from_responder() {
    let service = FakeNameService::start(Replies {
        status: vec![workstation_status()],
        name: vec![responder::name_reply(
            "WS01",
            &[Ipv4Addr::UNSPECIFIED, Ipv4Addr::new(10, 0, 0, 5)],
        )],
    })
    .await
    .unwrap();

    let info = probe::probe(LOCALHOST, &config_for(&service)).await.unwrap();

    assert_eq!(info.name, "WS01");
    assert_eq!(info.user_name, "ALICE");
    assert_eq!(info.hw, "00:1a:2b:3c:4d:5e");
    assert_eq!(info.net, "10.0.0.5");
    // ALICE is the only non-group name that differs from the host name
    assert_eq!(info.domain, "ALICE");

    let requests = service.wait_for_requests(2, WAIT).await;
    assert_eq!(requests.len(), 2);
    assert_eq!(responder::request_type(&requests[0]), Some(0x21));
    assert_eq!(responder::request_type(&requests[1]), Some(0x20));
    assert_eq!(responder::queried_name(&requests[1]).as_deref(), Some("WS01"));
}

#[tokio::test]
async fn check_marks_port_open_on_success() {
    let service = FakeNameService::start(Replies {
        status: vec![responder::status_reply(&[("SRV", 0x20, 0x0400)], [0; 6])],
        name: vec![responder::name_reply("SRV", &[Ipv4Addr::new(192, 168, 7, 2)])],
    })
    .await
    .unwrap();

    let mut result = ScanResult::default();
    probe::check(LOCALHOST, &config_for(&service), &mut result).await.unwrap();

    assert!(result.port_opened);
    assert_eq!(result.service_name.as_deref(), Some("netbios"));
    assert_eq!(result.netbios.name, "SRV");
    assert_eq!(result.netbios.hw, HW_ADDR_UNKNOWN);
    assert!(result.netbios.domain.is_empty());
    assert_eq!(result.netbios.net, "192.168.7.2");
}

#[tokio::test]
async fn silent_target_times_out_and_leaves_result_untouched() {
    let service = FakeNameService::start(Replies::default()).await.unwrap();

    let mut result = ScanResult::default();
    let err = probe::check(LOCALHOST, &config_for(&service), &mut result)
        .await
        .unwrap_err();

    assert!(matches!(err, ProbeError::Timeout(_)));
    assert!(err.is_transport());
    assert_eq!(result, ScanResult::default());
}

/// Two status replies exhaust the read budget; only one name query goes out.
#[tokio::test]
async fn repeated_status_replies_leave_exchange_incomplete() {
    let service = FakeNameService::start(Replies {
        status: vec![workstation_status(), workstation_status()],
        name: Vec::new(),
    })
    .await
    .unwrap();

    let err = probe::probe(LOCALHOST, &config_for(&service)).await.unwrap_err();
    assert!(matches!(err, ProbeError::ExchangeIncomplete));

    let requests = service.wait_for_requests(2, WAIT).await;
    let name_queries = requests
        .iter()
        .filter(|req| responder::request_type(req) == Some(0x20))
        .count();
    assert_eq!(name_queries, 1);
}

#[tokio::test]
async fn garbage_datagram_consumes_read_budget() {
    let service = FakeNameService::start(Replies {
        status: vec![vec![0xff; 8], workstation_status()],
        name: vec![responder::name_reply("WS01", &[Ipv4Addr::new(10, 0, 0, 5)])],
    })
    .await
    .unwrap();

    let err = probe::probe(LOCALHOST, &config_for(&service)).await.unwrap_err();
    assert!(matches!(err, ProbeError::ExchangeIncomplete));
}

#[tokio::test]
async fn triggered_stop_signal_prevents_any_traffic() {
    let service = FakeNameService::start(Replies {
        status: vec![workstation_status()],
        name: Vec::new(),
    })
    .await
    .unwrap();

    let stop = StopSignal::new();
    stop.trigger();
    let cfg = config_for(&service).with_stop(stop);

    let err = probe::probe(LOCALHOST, &cfg).await.unwrap_err();
    assert!(matches!(err, ProbeError::Cancelled));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(service.requests().is_empty());
}
