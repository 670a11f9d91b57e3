//! Integration tests for the EVM client over a mocked transport.

use alloy::primitives::{address, b256};
use serde_json::json;

use chainscan::services::blockchain::{BlockChainClient, BlockChainError, EvmClient};

use crate::integration::mocks::MockTransport;

const TRANSFER_TOPIC: &str = "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";

#[tokio::test]
async fn test_get_latest_block_number_parses_hex_quantity() {
	let mut transport = MockTransport::new();
	transport
		.expect_send_raw_request()
		.withf(|method, params| method == "eth_blockNumber" && params.is_none())
		.returning(|_, _| Ok(json!({ "jsonrpc": "2.0", "id": 1, "result": "0x3e8" })));

	let client = EvmClient::new_with_transport(transport);
	assert_eq!(client.get_latest_block_number().await.unwrap(), 1000);
}

#[tokio::test]
async fn test_get_latest_block_number_missing_result() {
	let mut transport = MockTransport::new();
	transport
		.expect_send_raw_request()
		.returning(|_, _| Ok(json!({ "jsonrpc": "2.0", "id": 1 })));

	let client = EvmClient::new_with_transport(transport);
	let result = client.get_latest_block_number().await;
	assert!(matches!(result, Err(BlockChainError::RequestError(_))));
}

#[tokio::test]
async fn test_get_latest_block_number_malformed_quantity() {
	let mut transport = MockTransport::new();
	transport
		.expect_send_raw_request()
		.returning(|_, _| Ok(json!({ "jsonrpc": "2.0", "id": 1, "result": "0xzz" })));

	let client = EvmClient::new_with_transport(transport);
	let result = client.get_latest_block_number().await;
	assert!(matches!(result, Err(BlockChainError::RequestError(_))));
}

#[tokio::test]
async fn test_get_logs_builds_filter_and_parses_logs() {
	let contract = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
	let topic = b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");

	let mut transport = MockTransport::new();
	transport
		.expect_send_raw_request()
		.withf(move |method, params| {
			if method != "eth_getLogs" {
				return false;
			}
			let filter = &params.as_ref().unwrap()[0];
			filter["address"] == json!("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
				&& filter["fromBlock"] == json!("0x1f4")
				&& filter["toBlock"] == json!("0x3e8")
				&& filter["topics"] == json!([TRANSFER_TOPIC])
		})
		.returning(|_, _| {
			Ok(json!({
				"jsonrpc": "2.0",
				"id": 1,
				"result": [{
					"address": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
					"topics": [
						TRANSFER_TOPIC,
						"0x0000000000000000000000000000000000000000000000000000000000000001",
						"0x0000000000000000000000000000000000000000000000000000000000000002"
					],
					"data":
						"0x0000000000000000000000000000000000000000000000000de0b6b3a7640000",
					"blockNumber": "0x2ee",
					"transactionHash":
						"0x1111111111111111111111111111111111111111111111111111111111111111"
				}]
			}))
		});

	let client = EvmClient::new_with_transport(transport);
	let logs = client.get_logs(contract, 500, 1000, topic).await.unwrap();

	assert_eq!(logs.len(), 1);
	assert_eq!(logs[0].address, contract);
	assert_eq!(logs[0].block_number.to::<u64>(), 750);
	assert_eq!(logs[0].topics[0], topic);
}

#[tokio::test]
async fn test_get_logs_empty_result() {
	let contract = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
	let topic = b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");

	let mut transport = MockTransport::new();
	transport
		.expect_send_raw_request()
		.returning(|_, _| Ok(json!({ "jsonrpc": "2.0", "id": 1, "result": [] })));

	let client = EvmClient::new_with_transport(transport);
	let logs = client.get_logs(contract, 1, 100, topic).await.unwrap();
	assert!(logs.is_empty());
}

#[tokio::test]
async fn test_get_logs_propagates_transport_failure() {
	let contract = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
	let topic = b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");

	let mut transport = MockTransport::new();
	transport
		.expect_send_raw_request()
		.returning(|_, _| Err(BlockChainError::connection_error("connection refused")));

	let client = EvmClient::new_with_transport(transport);
	let result = client.get_logs(contract, 1, 100, topic).await;
	assert!(matches!(result, Err(BlockChainError::ConnectionError(_))));
}
