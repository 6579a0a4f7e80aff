//! JSON-RPC Registry Adapter
//!
//! Reads go through `eth_call` against the latest block. The write is handed
//! to the session's signing agent and then confirmed by polling
//! `eth_getTransactionReceipt`.

use std::time::Duration;

use async_trait::async_trait;
use ct_01_wallet_session::Session;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use shared_rpc::{JsonRpcClient, RpcError};
use shared_types::{hash_from_hex, Hash, Station, TxReceipt, WalletAddress};
use tracing::{debug, info, warn};

use crate::abi::{self, Token};
use crate::config::RegistryConfig;
use crate::domain::{RegisterCitizenCall, RegistryError};
use crate::ports::{RegistryReader, RegistryWriter};

/// `eth_call` transaction object.
#[derive(Debug, Serialize)]
struct CallRequest {
    to: WalletAddress,
    data: String,
}

/// The subset of a transaction receipt this client needs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReceipt {
    transaction_hash: String,
    #[serde(default)]
    block_number: Option<U256>,
    from: WalletAddress,
    #[serde(default)]
    status: Option<U256>,
}

/// Registry contract client over JSON-RPC.
pub struct JsonRpcRegistry {
    client: JsonRpcClient,
    config: RegistryConfig,
}

impl JsonRpcRegistry {
    /// Create a client. The contract address is validated per operation, not
    /// here, so a misconfigured deployment still starts.
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        let client = JsonRpcClient::with_timeout(
            config.rpc_url.clone(),
            Duration::from_secs(config.request_timeout_secs.max(1)),
        )
        .map_err(|e| RegistryError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    async fn eth_call(&self, data: Vec<u8>) -> Result<Vec<u8>, RegistryError> {
        let to = self.config.contract_address()?;
        let request = CallRequest {
            to,
            data: format!("0x{}", hex::encode(data)),
        };

        let raw: String = self
            .client
            .call("eth_call", (request, "latest"))
            .await
            .map_err(map_rpc_error)?;

        hex::decode(raw.trim_start_matches("0x"))
            .map_err(|e| RegistryError::Decode(format!("eth_call result: {e}")))
    }

    async fn wait_for_receipt(&self, tx_hash: Hash) -> Result<TxReceipt, RegistryError> {
        let hash_hex = format!("0x{}", hex::encode(tx_hash));
        let interval = Duration::from_millis(self.config.receipt_poll_interval_ms.max(1));

        loop {
            let receipt: Option<RawReceipt> = self
                .client
                .call("eth_getTransactionReceipt", [&hash_hex])
                .await
                .map_err(map_rpc_error)?;

            match receipt {
                Some(raw) => return receipt_from_raw(raw),
                None => {
                    debug!(tx_hash = %hash_hex, "[ct-03] Receipt not yet available");
                    tokio::time::sleep(interval).await;
                }
            }
        }
    }
}

#[async_trait]
impl RegistryReader for JsonRpcRegistry {
    async fn is_platform_admin(&self, wallet: WalletAddress) -> Result<bool, RegistryError> {
        let data = abi::encode_call(abi::IS_PLATFORM_ADMIN, &[Token::Address(wallet)]);
        let out = self.eth_call(data).await?;
        abi::decode_bool(&out).map_err(|e| RegistryError::Decode(e.to_string()))
    }

    async fn is_citizen(&self, wallet: WalletAddress) -> Result<bool, RegistryError> {
        let data = abi::encode_call(abi::IS_CITIZEN, &[Token::Address(wallet)]);
        let out = self.eth_call(data).await?;
        abi::decode_bool(&out).map_err(|e| RegistryError::Decode(e.to_string()))
    }

    async fn get_station_by_wallet(
        &self,
        wallet: WalletAddress,
    ) -> Result<Option<Station>, RegistryError> {
        let data = abi::encode_call(abi::GET_STATION_BY_WALLET, &[Token::Address(wallet)]);
        let out = match self.eth_call(data).await {
            Ok(out) => out,
            // The contract reverts for wallets it has no station for.
            Err(RegistryError::Reverted(reason)) => {
                debug!(wallet = %wallet, "[ct-03] Station lookup reverted: {}", reason);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let station = abi::decode_station(&out).map_err(|e| RegistryError::Decode(e.to_string()))?;
        if station.wallet.is_zero() {
            return Ok(None);
        }
        Ok(Some(station))
    }
}

#[async_trait]
impl RegistryWriter for JsonRpcRegistry {
    async fn register_citizen(
        &self,
        session: &Session,
        call: RegisterCitizenCall,
    ) -> Result<TxReceipt, RegistryError> {
        let to = self.config.contract_address()?;
        let data = abi::encode_call(
            abi::REGISTER_CITIZEN,
            &[
                Token::String(call.alias_name),
                Token::String(call.id_type),
                Token::FixedBytes(call.id_fingerprint.0),
                Token::String(call.metadata),
            ],
        );

        let tx_hash = session.send_transaction(to, data).await?;
        info!(
            wallet = %session.address(),
            tx_hash = %format!("0x{}", hex::encode(tx_hash)),
            "[ct-03] registerCitizen submitted, awaiting receipt"
        );

        let receipt = self.wait_for_receipt(tx_hash).await?;
        if !receipt.success {
            warn!(tx_hash = %receipt.tx_hash_hex(), "[ct-03] registerCitizen reverted");
            return Err(RegistryError::Reverted(format!(
                "transaction {} failed on-chain",
                receipt.tx_hash_hex()
            )));
        }
        Ok(receipt)
    }
}

fn map_rpc_error(err: RpcError) -> RegistryError {
    match err {
        RpcError::Rpc(rpc) if rpc.is_revert() => RegistryError::Reverted(rpc.message),
        other => RegistryError::Transport(other.to_string()),
    }
}

fn receipt_from_raw(raw: RawReceipt) -> Result<TxReceipt, RegistryError> {
    let tx_hash = hash_from_hex(&raw.transaction_hash).ok_or_else(|| {
        RegistryError::Decode(format!("bad transaction hash {}", raw.transaction_hash))
    })?;
    let block_number = raw.block_number.unwrap_or_default();
    if block_number > U256::from(u64::MAX) {
        return Err(RegistryError::Decode("block number overflow".to_string()));
    }

    Ok(TxReceipt {
        tx_hash,
        block_number: block_number.low_u64(),
        from: raw.from,
        // Receipts without a status field predate status codes; inclusion is success.
        success: raw.status.map_or(true, |s| !s.is_zero()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_rpc::JsonRpcError;

    fn raw_receipt(json: serde_json::Value) -> RawReceipt {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_receipt_success_and_failure() {
        let hash = format!("0x{}", "ab".repeat(32));
        let ok = receipt_from_raw(raw_receipt(serde_json::json!({
            "transactionHash": hash,
            "blockNumber": "0x1b4",
            "from": "0x5b38da6a701c568545dcfcb03fcb875f56beddc4",
            "status": "0x1"
        })))
        .unwrap();
        assert!(ok.success);
        assert_eq!(ok.block_number, 436);
        assert_eq!(ok.tx_hash, [0xab; 32]);

        let failed = receipt_from_raw(raw_receipt(serde_json::json!({
            "transactionHash": hash,
            "blockNumber": "0x1",
            "from": "0x5b38da6a701c568545dcfcb03fcb875f56beddc4",
            "status": "0x0"
        })))
        .unwrap();
        assert!(!failed.success);
    }

    #[test]
    fn test_revert_classification() {
        let revert = map_rpc_error(RpcError::Rpc(JsonRpcError {
            code: 3,
            message: "execution reverted: Station not found".into(),
            data: None,
        }));
        assert!(matches!(revert, RegistryError::Reverted(_)));

        let other = map_rpc_error(RpcError::Connection("refused".into()));
        assert!(matches!(other, RegistryError::Transport(_)));
    }

    #[tokio::test]
    async fn test_missing_contract_address_before_network() {
        // Unroutable provider: a network attempt would surface as Transport.
        let registry = JsonRpcRegistry::new(RegistryConfig {
            rpc_url: "http://127.0.0.1:9".into(),
            contract_address: None,
            ..RegistryConfig::for_testing()
        })
        .unwrap();

        let err = registry
            .is_citizen(WalletAddress([1; 20]))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Configuration(_)));

        let err = registry
            .get_station_by_wallet(WalletAddress([1; 20]))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transport_error() {
        let registry = JsonRpcRegistry::new(RegistryConfig::for_testing()).unwrap();
        let err = registry
            .is_platform_admin(WalletAddress([1; 20]))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Transport(_)));
    }
}
