// Checker tests.
//
// A stub resolver answers from a fixed table and records every lookup, so the
// tests can assert which domains reached the "network".

use super::*;
use crate::config::{DnsServerPool, WaitLevel};
use crate::error_handling::ResolutionFailure;
use async_trait::async_trait;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
struct StubResolver {
    answers: HashMap<String, Result<Vec<Ipv4Addr>, ResolutionFailure>>,
    calls: Mutex<Vec<(String, IpAddr)>>,
}

impl StubResolver {
    fn with(mut self, domain: &str, answer: Result<Vec<Ipv4Addr>, ResolutionFailure>) -> Self {
        self.answers.insert(domain.to_string(), answer);
        self
    }

    fn called_domains(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(domain, _)| domain.clone())
            .collect()
    }

    fn called_servers(&self) -> Vec<IpAddr> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, server)| *server)
            .collect()
    }
}

#[async_trait]
impl AddressResolver for StubResolver {
    async fn lookup_a(
        &self,
        domain: &str,
        server: IpAddr,
        _timeout: Duration,
    ) -> Result<Vec<Ipv4Addr>, ResolutionFailure> {
        self.calls
            .lock()
            .unwrap()
            .push((domain.to_string(), server));
        self.answers
            .get(domain)
            .cloned()
            .unwrap_or(Err(ResolutionFailure::NoSuchName))
    }
}

fn address() -> Ipv4Addr {
    "93.184.216.34".parse().unwrap()
}

fn seeded_config() -> CheckConfig {
    CheckConfig {
        seed: Some(1234),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_end_to_end_partition() {
    let stub = StubResolver::default()
        .with("good.example", Ok(vec![address()]))
        .with("nxdomain.example", Err(ResolutionFailure::NoSuchName));
    let mut checker = Checker::new(stub, seeded_config());

    let summary = checker
        .run(&["good.example", "bad..example", "nxdomain.example"])
        .await;

    assert_eq!(summary.alive, vec!["good.example"]);
    assert_eq!(summary.dead, vec!["nxdomain.example"]);
    assert_eq!(summary.invalid, 1);
    assert_eq!(summary.checked, 3);
    assert_eq!(summary.total, 3);
    assert!(!summary.is_aborted());
    assert_eq!(
        checker.resolver().called_domains(),
        vec!["good.example", "nxdomain.example"]
    );
}

#[tokio::test]
async fn test_invalid_domains_never_reach_resolver() {
    let mut checker = Checker::new(StubResolver::default(), seeded_config());
    let inputs = ["", "   ", "no-tld", "a..b.com", "evil.com\x1b[2J", "-x.com"];

    let summary = checker.run(&inputs).await;

    assert!(summary.alive.is_empty());
    assert!(summary.dead.is_empty());
    assert_eq!(summary.invalid, inputs.len());
    assert!(checker.resolver().called_domains().is_empty());
}

#[tokio::test]
async fn test_authoritative_negatives_are_dead() {
    let stub = StubResolver::default()
        .with("nx.example", Err(ResolutionFailure::NoSuchName))
        .with("noa.example", Err(ResolutionFailure::NoAnswer))
        .with(
            "servfail.example",
            Err(ResolutionFailure::NoNameservers("SERVFAIL".into())),
        );
    let mut checker = Checker::new(stub, seeded_config());

    let summary = checker
        .run(&["nx.example", "noa.example", "servfail.example"])
        .await;

    assert!(summary.alive.is_empty());
    assert_eq!(
        summary.dead,
        vec!["nx.example", "noa.example", "servfail.example"]
    );
}

#[tokio::test]
async fn test_timeout_is_excluded_and_run_continues() {
    let stub = StubResolver::default()
        .with("slow.example", Err(ResolutionFailure::Timeout))
        .with("after.example", Ok(vec![address()]));
    let mut checker = Checker::new(stub, seeded_config());

    let summary = checker.run(&["slow.example", "after.example"]).await;

    assert_eq!(summary.alive, vec!["after.example"]);
    assert!(summary.dead.is_empty());
    assert_eq!(summary.transient, 1);
    assert_eq!(summary.checked, 2);
}

#[tokio::test]
async fn test_unexpected_failure_is_transient_not_dead() {
    let stub = StubResolver::default().with(
        "broken.example",
        Err(ResolutionFailure::Other("socket closed".into())),
    );
    let mut checker = Checker::new(stub, seeded_config());

    let summary = checker.run(&["broken.example"]).await;

    assert!(summary.dead.is_empty());
    assert!(summary.alive.is_empty());
    assert_eq!(summary.transient, 1);
}

#[tokio::test]
async fn test_malformed_name_from_resolver_is_invalid() {
    let stub = StubResolver::default().with(
        "odd.example",
        Err(ResolutionFailure::MalformedName("label too long".into())),
    );
    let mut checker = Checker::new(stub, seeded_config());

    let summary = checker.run(&["odd.example"]).await;

    assert_eq!(summary.invalid, 1);
    assert!(summary.dead.is_empty());
}

#[tokio::test]
async fn test_override_server_used_for_every_domain() {
    let fixed: IpAddr = "192.0.2.53".parse().unwrap();
    let config = CheckConfig {
        server: Some(fixed),
        // An unusable pool proves the override bypasses it entirely
        pool: DnsServerPool::new(["garbage"]),
        ..seeded_config()
    };
    let mut checker = Checker::new(StubResolver::default(), config);

    let summary = checker.run(&["a.example", "b.example", "c.example"]).await;

    assert!(!summary.is_aborted());
    assert_eq!(checker.resolver().called_servers(), vec![fixed; 3]);
}

#[tokio::test]
async fn test_pool_server_redrawn_per_domain() {
    let domains: Vec<String> = (0..50).map(|i| format!("d{i}.example")).collect();
    let mut checker = Checker::new(StubResolver::default(), seeded_config());

    checker.run(&domains).await;

    let servers = checker.resolver().called_servers();
    assert_eq!(servers.len(), 50);
    let distinct: std::collections::HashSet<_> = servers.iter().collect();
    assert!(distinct.len() > 1, "expected more than one server across 50 draws");
    let pool = DnsServerPool::default();
    for server in servers {
        assert!(pool.servers().contains(&server.to_string()));
    }
}

#[tokio::test]
async fn test_corrupted_pool_aborts_with_empty_lists() {
    let stub = StubResolver::default().with("good.example", Ok(vec![address()]));
    let config = CheckConfig {
        pool: DnsServerPool::new(["not-an-ip"]),
        ..seeded_config()
    };
    let mut checker = Checker::new(stub, config);

    let summary = checker
        .run(&["bad..example", "good.example", "later.example"])
        .await;

    assert!(summary.alive.is_empty());
    assert!(summary.dead.is_empty());
    assert_eq!(
        summary.aborted,
        Some(CheckError::PoolCorruption {
            server: "not-an-ip".to_string()
        })
    );
    // Only the invalid line before the failing draw was processed
    assert_eq!(summary.checked, 1);
    assert!(checker.resolver().called_domains().is_empty());
}

#[tokio::test]
async fn test_partially_corrupted_pool_discards_earlier_results() {
    let domains: Vec<String> = (0..40).map(|i| format!("d{i}.example")).collect();
    let stub = domains.iter().fold(StubResolver::default(), |stub, d| {
        stub.with(d, Ok(vec![address()]))
    });
    let config = CheckConfig {
        pool: DnsServerPool::new(["8.8.8.8", "corrupt"]),
        ..seeded_config()
    };
    let mut checker = Checker::new(stub, config);

    let summary = checker.run(&domains).await;

    // With 40 independent draws from two entries the bad one comes up
    assert!(summary.is_aborted());
    assert!(summary.alive.is_empty());
    assert!(summary.dead.is_empty());
    assert!(summary.checked < domains.len());
}

#[tokio::test]
async fn test_empty_pool_aborts() {
    let config = CheckConfig {
        pool: DnsServerPool::new(Vec::<String>::new()),
        ..seeded_config()
    };
    let mut checker = Checker::new(StubResolver::default(), config);

    let summary = checker.run(&["a.example"]).await;

    assert_eq!(summary.aborted, Some(CheckError::EmptyPool));
}

#[tokio::test]
async fn test_zero_timeout_refuses_to_start() {
    let stub = StubResolver::default().with("good.example", Ok(vec![address()]));
    let config = CheckConfig {
        server: Some("192.0.2.53".parse().unwrap()),
        timeout: Duration::ZERO,
        ..seeded_config()
    };
    let mut checker = Checker::new(stub, config);

    let summary = checker.run(&["good.example", "other.example"]).await;

    assert_eq!(summary.aborted, Some(CheckError::ZeroTimeout));
    assert_eq!(summary.checked, 0);
    assert_eq!(summary.transient, 0);
    assert!(checker.resolver().called_domains().is_empty());
}

#[tokio::test]
async fn test_check_domain_rejects_zero_timeout() {
    let config = CheckConfig {
        timeout: Duration::ZERO,
        ..seeded_config()
    };
    let mut checker = Checker::new(StubResolver::default(), config);

    assert_eq!(
        checker.check_domain("good.example").await,
        Err(CheckError::ZeroTimeout)
    );
}

#[tokio::test]
async fn test_runs_are_idempotent() {
    let make_stub = || {
        StubResolver::default()
            .with("one.example", Ok(vec![address()]))
            .with("two.example", Err(ResolutionFailure::NoAnswer))
            .with("three.example", Ok(vec![address()]))
            .with("four.example", Err(ResolutionFailure::Timeout))
    };
    let domains = [
        "one.example",
        "two.example",
        "x..example",
        "three.example",
        "four.example",
        "five.example",
    ];

    let first = Checker::new(make_stub(), CheckConfig::default())
        .run(&domains)
        .await;
    let second = Checker::new(make_stub(), CheckConfig::default())
        .run(&domains)
        .await;

    assert_eq!(first, second);
    assert_eq!(first.alive, vec!["one.example", "three.example"]);
    assert_eq!(first.dead, vec!["two.example", "five.example"]);
}

#[tokio::test]
async fn test_empty_input() {
    let mut checker = Checker::new(StubResolver::default(), seeded_config());
    let summary = checker.run::<&str>(&[]).await;
    assert_eq!(summary, CheckSummary::new(0));
}

#[tokio::test(start_paused = true)]
async fn test_no_wait_level_means_no_pacing() {
    let mut checker = Checker::new(StubResolver::default(), seeded_config());
    let start = tokio::time::Instant::now();

    checker.run(&["a.example", "b.example", "c.example"]).await;

    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_pacing_stays_within_level_bounds() {
    let domains = ["a.example", "b.example", "c.example", "d.example"];
    let n = domains.len() as u64;

    for level in [WaitLevel::Short, WaitLevel::Medium, WaitLevel::Long] {
        let config = CheckConfig {
            wait_level: Some(level),
            ..seeded_config()
        };
        let mut checker = Checker::new(StubResolver::default(), config);
        let start = tokio::time::Instant::now();

        checker.run(&domains).await;

        let elapsed = start.elapsed();
        let (min, max) = level.range_secs();
        assert!(
            elapsed >= Duration::from_secs(n * min) && elapsed <= Duration::from_secs(n * max),
            "{level:?}: elapsed {elapsed:?} outside [{}s, {}s]",
            n * min,
            n * max
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_invalid_domains_are_not_paced() {
    let config = CheckConfig {
        wait_level: Some(WaitLevel::Long),
        ..seeded_config()
    };
    let mut checker = Checker::new(StubResolver::default(), config);
    let start = tokio::time::Instant::now();

    checker.run(&["", "a..b", "no-tld"]).await;

    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test]
async fn test_check_domain_reports_server() {
    let fixed: IpAddr = "2001:db8::53".parse().unwrap();
    let config = CheckConfig {
        server: Some(fixed),
        ..seeded_config()
    };
    let stub = StubResolver::default().with("v6.example", Ok(vec![address()]));
    let mut checker = Checker::new(stub, config);

    let result = checker.check_domain("v6.example").await.unwrap();

    assert_eq!(result.verdict, Verdict::Alive);
    assert_eq!(result.server, Some(fixed));
    assert_eq!(result.addresses, vec![address()]);
}
