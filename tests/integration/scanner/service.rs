//! Integration tests for the per-network scanner.

use alloy::primitives::{address, Address, U256};
use mockall::predicate::eq;

use chainscan::{
	models::{Network, NetworkConfig},
	services::{
		blockchain::BlockChainError,
		decoder::TransferDecoder,
		scanner::{ScanOutcome, ScannerError, ScannerService},
	},
};

use crate::integration::mocks::{transfer_log, MockClientFactory, MockEvmClient};

const NETWORK: Network = Network {
	name: "base",
	rpc_env: "BASE_RPC",
	contracts_env: "BASE_REWARD_CONTRACTS",
};

fn network_config(rpc_url: Option<&str>, contracts: Vec<Address>) -> NetworkConfig {
	NetworkConfig {
		network: NETWORK,
		rpc_url: rpc_url.map(|url| url.to_string()),
		contracts,
	}
}

fn scanner(factory: MockClientFactory, block_window: u64) -> ScannerService<MockClientFactory> {
	ScannerService::new(factory, TransferDecoder::new(), block_window)
}

#[tokio::test]
async fn test_scan_skips_network_without_rpc() {
	let factory = MockClientFactory::new();
	let scanner = scanner(factory, 500);

	let outcome = scanner
		.scan(&network_config(None, vec![]))
		.await
		.unwrap();

	assert_eq!(outcome, ScanOutcome::SkippedNoRpc);
}

#[tokio::test]
async fn test_scan_propagates_height_query_failure() {
	let mut client = MockEvmClient::new();
	client
		.expect_get_latest_block_number()
		.returning(|| Err(BlockChainError::connection_error("node down")));

	let factory = MockClientFactory::new();
	factory.queue(client);
	let scanner = scanner(factory, 500);

	let result = scanner
		.scan(&network_config(Some("https://base.example"), vec![]))
		.await;

	assert!(matches!(result, Err(ScannerError::ConnectivityError(_))));
}

#[tokio::test]
async fn test_scan_collects_events_per_contract() {
	let contract_a = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
	let contract_b = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
	let sender = address!("0000000000000000000000000000000000000001");
	let recipient = address!("0000000000000000000000000000000000000002");

	let mut client = MockEvmClient::new();
	client
		.expect_get_latest_block_number()
		.returning(|| Ok(1000));
	client
		.expect_get_logs()
		.with(eq(contract_a), eq(500u64), eq(1000u64), mockall::predicate::always())
		.returning(move |_, _, _, _| {
			Ok(vec![
				transfer_log(contract_a, sender, recipient, U256::from(100)),
				transfer_log(contract_a, sender, recipient, U256::from(200)),
			])
		});
	client
		.expect_get_logs()
		.with(eq(contract_b), eq(500u64), eq(1000u64), mockall::predicate::always())
		.returning(|_, _, _, _| Ok(vec![]));

	let factory = MockClientFactory::new();
	factory.queue(client);
	let scanner = scanner(factory, 500);

	let outcome = scanner
		.scan(&network_config(
			Some("https://base.example"),
			vec![contract_a, contract_b],
		))
		.await
		.unwrap();

	let ScanOutcome::Completed(result) = outcome else {
		panic!("expected a completed scan");
	};
	assert_eq!(result.chain, "base");
	assert_eq!(result.latest, 1000);
	assert_eq!(result.from_block, 500);
	assert_eq!(result.contracts_count, 2);
	assert_eq!(result.events.len(), 2);
	assert!(result.events.iter().all(|event| event.contract == contract_a));
	assert_eq!(result.events[0].value, "100");
	assert_eq!(result.events[1].value, "200");
}

#[tokio::test]
async fn test_scan_clamps_window_at_first_block() {
	let mut client = MockEvmClient::new();
	client.expect_get_latest_block_number().returning(|| Ok(100));

	let factory = MockClientFactory::new();
	factory.queue(client);
	let scanner = scanner(factory, 500);

	let outcome = scanner
		.scan(&network_config(Some("https://base.example"), vec![]))
		.await
		.unwrap();

	let ScanOutcome::Completed(result) = outcome else {
		panic!("expected a completed scan");
	};
	assert_eq!(result.from_block, 1);
	assert_eq!(result.latest, 100);
}

#[tokio::test]
async fn test_scan_isolates_contract_failures() {
	let contract_a = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
	let contract_b = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
	let sender = address!("0000000000000000000000000000000000000001");
	let recipient = address!("0000000000000000000000000000000000000002");

	let mut client = MockEvmClient::new();
	client
		.expect_get_latest_block_number()
		.returning(|| Ok(1000));
	client
		.expect_get_logs()
		.with(eq(contract_a), eq(500u64), eq(1000u64), mockall::predicate::always())
		.returning(|_, _, _, _| Err(BlockChainError::request_error("query exploded")));
	client
		.expect_get_logs()
		.with(eq(contract_b), eq(500u64), eq(1000u64), mockall::predicate::always())
		.returning(move |_, _, _, _| {
			Ok(vec![transfer_log(
				contract_b,
				sender,
				recipient,
				U256::from(42),
			)])
		});

	let factory = MockClientFactory::new();
	factory.queue(client);
	let scanner = scanner(factory, 500);

	let outcome = scanner
		.scan(&network_config(
			Some("https://base.example"),
			vec![contract_a, contract_b],
		))
		.await
		.unwrap();

	let ScanOutcome::Completed(result) = outcome else {
		panic!("expected a completed scan");
	};
	// The failing contract contributes nothing; the watch-list size is
	// unchanged
	assert_eq!(result.contracts_count, 2);
	assert_eq!(result.events.len(), 1);
	assert_eq!(result.events[0].contract, contract_b);
}

#[tokio::test]
async fn test_scan_drops_logs_that_do_not_decode() {
	let contract = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
	let sender = address!("0000000000000000000000000000000000000001");
	let recipient = address!("0000000000000000000000000000000000000002");

	let mut client = MockEvmClient::new();
	client
		.expect_get_latest_block_number()
		.returning(|| Ok(1000));
	client.expect_get_logs().returning(move |_, _, _, _| {
		let good = transfer_log(contract, sender, recipient, U256::from(7));
		let mut bad = transfer_log(contract, sender, recipient, U256::from(8));
		bad.topics.pop();
		Ok(vec![bad, good])
	});

	let factory = MockClientFactory::new();
	factory.queue(client);
	let scanner = scanner(factory, 500);

	let outcome = scanner
		.scan(&network_config(Some("https://base.example"), vec![contract]))
		.await
		.unwrap();

	let ScanOutcome::Completed(result) = outcome else {
		panic!("expected a completed scan");
	};
	// The malformed sibling is dropped silently; the rest decode
	assert_eq!(result.events.len(), 1);
	assert_eq!(result.events[0].value, "7");
}

#[tokio::test]
async fn test_scan_with_empty_watch_list_yields_no_events() {
	let mut client = MockEvmClient::new();
	client
		.expect_get_latest_block_number()
		.returning(|| Ok(1000));
	// No get_logs expectation: an empty watch-list must not query at all

	let factory = MockClientFactory::new();
	factory.queue(client);
	let scanner = scanner(factory, 500);

	let outcome = scanner
		.scan(&network_config(Some("https://base.example"), vec![]))
		.await
		.unwrap();

	let ScanOutcome::Completed(result) = outcome else {
		panic!("expected a completed scan");
	};
	assert_eq!(result.contracts_count, 0);
	assert!(result.events.is_empty());
}
