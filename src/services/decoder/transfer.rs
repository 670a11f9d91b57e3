use alloy::primitives::{keccak256, Address, B256, U256};
use tracing::trace;

use crate::models::{EVMLog, TransferEvent};

/// Canonical signature of the watched event:
/// `Transfer(address indexed from, address indexed to, uint256 value)`
pub const TRANSFER_EVENT_SIGNATURE: &str = "Transfer(address,address,uint256)";

/// Expected topic count: signature hash plus the two indexed addresses
const TRANSFER_TOPIC_COUNT: usize = 3;

/// Width of the ABI-encoded uint256 amount in the data section
const TRANSFER_DATA_LEN: usize = 32;

/// Decoder for ERC-20 `Transfer` logs.
///
/// The topic hash is computed once at construction and reused for every
/// query and decode.
#[derive(Debug, Clone)]
pub struct TransferDecoder {
	topic: B256,
}

impl TransferDecoder {
	pub fn new() -> Self {
		Self {
			topic: keccak256(TRANSFER_EVENT_SIGNATURE.as_bytes()),
		}
	}

	/// Topic hash identifying the watched event, used to filter logs at the
	/// query layer
	pub fn signature(&self) -> B256 {
		self.topic
	}

	/// Decodes a raw log into a transfer record
	///
	/// Returns `None` for any log that does not match the expected shape:
	/// wrong leading topic, wrong indexed-topic arity, or a data section that
	/// is not a single uint256 word.
	pub fn decode(&self, log: &EVMLog) -> Option<TransferEvent> {
		if log.topics.len() != TRANSFER_TOPIC_COUNT || log.topics[0] != self.topic {
			trace!(
				contract = %log.address,
				topics = log.topics.len(),
				"log does not match the watched event shape"
			);
			return None;
		}

		if log.data.len() != TRANSFER_DATA_LEN {
			trace!(
				contract = %log.address,
				data_len = log.data.len(),
				"log data is not a single uint256 word"
			);
			return None;
		}

		let from = Address::from_word(log.topics[1]);
		let to = Address::from_word(log.topics[2]);
		let value = U256::from_be_slice(&log.data);

		Some(TransferEvent {
			contract: log.address,
			tx_hash: log.transaction_hash,
			block_number: log.block_number.to::<u64>(),
			from,
			to,
			value: value.to_string(),
		})
	}
}

impl Default for TransferDecoder {
	fn default() -> Self {
		Self::new()
	}
}
