// wallet-core/src/chains/sui/transfer.rs
//
// SUI Transfer Pipeline
//
//   Requested ──► Built ──► Estimated ──► Signed ──► Submitted
//   (validate,    (node     (dry-run,     (ed25519    (WaitForLocal
//    coins)        builds)   gas fee)      sign)       Execution)
//
// Mỗi bước chỉ chạy khi bước trước thành công. Không retry.
// Lỗi transport ở bước execute (trừ lỗi connect) → Indeterminate
// (tx có thể đã vào chain).

use crate::chains::sui::{SuiAddress, SuiSigner, SUI_COIN_TYPE, SUI_DECIMALS};
use crate::crypto::key_normalizer::KeyNormalizer;
use crate::error::{NetworkError, TransferError, TransferStage, WalletError, WalletResult};
use crate::network::models::PayRequest;
use crate::network::traits::SuiProvider;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

/// Gas budget ceiling used when none is configured (MIST).
pub const DEFAULT_GAS_BUDGET: u64 = 10_000_000;

/// What the caller wants to send. The secret is passed separately and never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub recipient: String,
    /// Decimal SUI amount, e.g. `"1.25"`.
    pub amount: String,
}

impl TransferRequest {
    pub fn new(recipient: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            amount: amount.into(),
        }
    }
}

/// Built and dry-run transaction, ready to be signed and executed once.
///
/// Not `Clone`: the fee estimate belongs to these exact bytes.
#[derive(Debug)]
pub struct PreparedTransfer {
    signer: SuiSigner,
    recipient: SuiAddress,
    coin_object_id: String,
    amount_mist: u64,
    tx_bytes: Vec<u8>,
    estimated_gas_fee: i128,
}

impl PreparedTransfer {
    pub fn sender(&self) -> SuiAddress {
        self.signer.address()
    }

    pub fn recipient(&self) -> SuiAddress {
        self.recipient
    }

    pub fn coin_object_id(&self) -> &str {
        &self.coin_object_id
    }

    pub fn amount_mist(&self) -> u64 {
        self.amount_mist
    }

    pub fn tx_bytes(&self) -> &[u8] {
        &self.tx_bytes
    }

    /// `computation + storage - rebate`; may be negative.
    pub fn estimated_gas_fee(&self) -> i128 {
        self.estimated_gas_fee
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferResult {
    pub digest: String,
    pub raw: serde_json::Value,
}

/// `floor(amount × 10^9)`. Zero, negative, and unparseable amounts are rejected.
pub fn parse_amount_mist(amount: &str) -> WalletResult<u64> {
    let invalid = |reason: &str| -> WalletError {
        TransferError::InvalidAmount(format!("'{}': {}", amount, reason)).into()
    };

    let value = Decimal::from_str(amount.trim()).map_err(|_| invalid("not a decimal number"))?;
    if value <= Decimal::ZERO {
        return Err(invalid("must be positive"));
    }

    let scale = Decimal::from(10u64.pow(SUI_DECIMALS));
    let mist = value
        .checked_mul(scale)
        .map(|v| v.floor())
        .and_then(|v| v.to_u64())
        .ok_or_else(|| invalid("out of range"))?;
    if mist == 0 {
        return Err(invalid("smaller than 1 MIST"));
    }
    Ok(mist)
}

/// Map a provider error into the transfer taxonomy for `stage`.
///
/// Node-reported errors become `on_rpc(message)`; transport failures keep
/// their cause and are tagged with the stage. Once submitted, any transport
/// failure that may have reached the node is indeterminate.
fn stage_error(
    stage: TransferStage,
    on_rpc: fn(String) -> TransferError,
) -> impl Fn(WalletError) -> WalletError {
    move |error| match error {
        WalletError::Network(NetworkError::Rpc { message, .. }) => on_rpc(message).into(),
        WalletError::Network(source)
            if stage == TransferStage::Submitted && source.may_have_reached_node() =>
        {
            TransferError::Indeterminate(source.to_string()).into()
        }
        WalletError::Network(source) => TransferError::Network { stage, source }.into(),
        other => other,
    }
}

/// build → dry-run → sign → execute against one provider.
pub struct TransferPipeline<P> {
    provider: P,
    gas_budget: u64,
    normalizer: KeyNormalizer,
}

impl<P: SuiProvider> TransferPipeline<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            gas_budget: DEFAULT_GAS_BUDGET,
            normalizer: KeyNormalizer::default(),
        }
    }

    pub fn with_gas_budget(mut self, gas_budget: u64) -> Self {
        self.gas_budget = gas_budget;
        self
    }

    pub fn with_normalizer(mut self, normalizer: KeyNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Requested → Built → Estimated.
    ///
    /// Recipient and amount are validated before any RPC call.
    pub async fn prepare(
        &self,
        secret: Option<&str>,
        request: &TransferRequest,
    ) -> WalletResult<PreparedTransfer> {
        let recipient: SuiAddress = request.recipient.parse()?;
        let amount_mist = parse_amount_mist(&request.amount)?;

        let key = self.normalizer.resolve(secret)?;
        let signer = SuiSigner::new(&key.scalar);
        let sender = signer.address();

        // Requested → Built
        let coins = self
            .provider
            .get_coins(&sender, SUI_COIN_TYPE)
            .await
            .map_err(stage_error(TransferStage::Requested, TransferError::BuildFailed))?;
        let coin = coins
            .data
            .into_iter()
            .next()
            .ok_or(TransferError::NoFundsAvailable)?;

        let pay = PayRequest {
            sender: sender.to_string(),
            input_coins: vec![coin.coin_object_id.clone()],
            recipients: vec![recipient.to_string()],
            amounts: vec![amount_mist],
            gas_budget: self.gas_budget,
        };
        let tx_bytes = self
            .provider
            .pay_sui(&pay)
            .await
            .map_err(stage_error(TransferStage::Requested, TransferError::BuildFailed))?;
        tracing::info!(
            stage = %TransferStage::Built,
            sender = %sender,
            recipient = %recipient,
            coin = %coin.coin_object_id,
            amount_mist,
            "transfer built"
        );

        // Built → Estimated
        let dry_run = self
            .provider
            .dry_run(&tx_bytes)
            .await
            .map_err(stage_error(TransferStage::Built, TransferError::EstimationFailed))?;
        let status = &dry_run.effects.status;
        if !status.is_success() {
            let reason = status.error.clone().unwrap_or_else(|| status.status.clone());
            return Err(TransferError::EstimationFailed(reason).into());
        }
        let estimated_gas_fee = dry_run
            .effects
            .gas_used
            .net_fee()
            .map_err(stage_error(TransferStage::Built, TransferError::EstimationFailed))?;
        tracing::info!(
            stage = %TransferStage::Estimated,
            sender = %sender,
            gas_fee = %estimated_gas_fee,
            "transfer estimated"
        );

        Ok(PreparedTransfer {
            signer,
            recipient,
            coin_object_id: coin.coin_object_id,
            amount_mist,
            tx_bytes,
            estimated_gas_fee,
        })
    }

    /// Estimated → Signed → Submitted. Consumes the prepared transfer.
    pub async fn submit(&self, prepared: PreparedTransfer) -> WalletResult<TransferResult> {
        let signature = prepared.signer.sign(&prepared.tx_bytes)?;
        tracing::info!(
            stage = %TransferStage::Signed,
            sender = %prepared.sender(),
            "transfer signed"
        );

        let response = self
            .provider
            .execute(&prepared.tx_bytes, &signature)
            .await
            .map_err(stage_error(TransferStage::Submitted, TransferError::ExecutionFailed))?;

        if let Some(status) = response.effects.as_ref().map(|e| &e.status) {
            if !status.is_success() {
                let reason = status.error.clone().unwrap_or_else(|| status.status.clone());
                tracing::warn!(digest = %response.digest, reason = %reason, "transfer rejected");
                return Err(TransferError::ExecutionFailed(reason).into());
            }
        }

        tracing::info!(
            stage = %TransferStage::Submitted,
            digest = %response.digest,
            "transfer executed"
        );
        Ok(TransferResult {
            digest: response.digest,
            raw: response.raw,
        })
    }

    /// `prepare` then `submit`.
    pub async fn send(
        &self,
        secret: Option<&str>,
        request: &TransferRequest,
    ) -> WalletResult<TransferResult> {
        let prepared = self.prepare(secret, request).await?;
        self.submit(prepared).await
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::scalar::PrivateScalar;
    use crate::network::client::SuiClient;
    use crate::network::mock::MockTransport;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde_json::{json, Value};

    const SECRET: &str = "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d";
    const TX_BYTES: [u8; 4] = [9, 8, 7, 6];

    fn recipient() -> String {
        format!("0x{}", "bb".repeat(32))
    }

    fn signer() -> SuiSigner {
        SuiSigner::new(&PrivateScalar::from_hex(SECRET).unwrap())
    }

    fn coins() -> Value {
        json!({
            "data": [
                {
                    "coinType": "0x2::sui::SUI",
                    "coinObjectId": "0xc0",
                    "version": "7",
                    "digest": "cd",
                    "balance": "5000000000"
                },
                {
                    "coinType": "0x2::sui::SUI",
                    "coinObjectId": "0xc1",
                    "version": "3",
                    "digest": "ce",
                    "balance": "9000000000"
                }
            ],
            "nextCursor": null,
            "hasNextPage": false
        })
    }

    fn effects(status: &str, computation: &str, storage: &str, rebate: &str) -> Value {
        let mut status_obj = json!({ "status": status });
        if status != "success" {
            status_obj["error"] = json!("InsufficientGas");
        }
        json!({
            "status": status_obj,
            "gasUsed": {
                "computationCost": computation,
                "storageCost": storage,
                "storageRebate": rebate
            }
        })
    }

    fn happy() -> MockTransport {
        MockTransport::new()
            .respond("suix_getCoins", coins())
            .respond("unsafe_paySui", json!({ "txBytes": STANDARD.encode(TX_BYTES) }))
            .respond(
                "sui_dryRunTransactionBlock",
                json!({ "effects": effects("success", "1000", "2000", "500") }),
            )
            .respond(
                "sui_executeTransactionBlock",
                json!({ "digest": "TX1", "effects": effects("success", "1000", "2000", "500") }),
            )
    }

    fn pipeline(transport: MockTransport) -> TransferPipeline<SuiClient<MockTransport>> {
        TransferPipeline::new(SuiClient::new(transport))
    }

    fn transfer_error(result: WalletResult<impl std::fmt::Debug>) -> TransferError {
        match result {
            Err(WalletError::Transfer(e)) => e,
            other => panic!("expected a transfer error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount_mist("1").unwrap(), 1_000_000_000);
        assert_eq!(parse_amount_mist("0.5").unwrap(), 500_000_000);
        assert_eq!(parse_amount_mist(" 1.0000000019 ").unwrap(), 1_000_000_001);
        assert!(parse_amount_mist("0").is_err());
        assert!(parse_amount_mist("-5").is_err());
        assert!(parse_amount_mist("abc").is_err());
        assert!(parse_amount_mist("0.0000000001").is_err());
    }

    #[tokio::test]
    async fn test_invalid_amount_makes_no_rpc_call() {
        for amount in ["0", "-5"] {
            let pipeline = pipeline(happy());
            let result = pipeline
                .prepare(Some(SECRET), &TransferRequest::new(recipient(), amount))
                .await;
            assert!(matches!(transfer_error(result), TransferError::InvalidAmount(_)));
            assert_eq!(pipeline.provider().transport().call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_invalid_recipient_makes_no_rpc_call() {
        let pipeline = pipeline(happy());
        let result = pipeline
            .prepare(Some(SECRET), &TransferRequest::new("bob", "1"))
            .await;
        assert!(matches!(transfer_error(result), TransferError::InvalidRecipient(_)));
        assert_eq!(pipeline.provider().transport().call_count(), 0);
    }

    #[tokio::test]
    async fn test_prepare_builds_with_first_coin() {
        let pipeline = pipeline(happy()).with_gas_budget(20_000_000);
        let prepared = pipeline
            .prepare(Some(SECRET), &TransferRequest::new(recipient(), "1.5"))
            .await
            .unwrap();

        assert_eq!(prepared.sender(), signer().address());
        assert_eq!(prepared.coin_object_id(), "0xc0");
        assert_eq!(prepared.amount_mist(), 1_500_000_000);
        assert_eq!(prepared.tx_bytes(), &TX_BYTES);
        assert_eq!(prepared.estimated_gas_fee(), 2500);

        let transport = pipeline.provider().transport();
        assert_eq!(
            transport.methods(),
            vec!["suix_getCoins", "unsafe_paySui", "sui_dryRunTransactionBlock"]
        );
        let params = transport.params_of("unsafe_paySui");
        assert_eq!(params[0], json!(signer().address().to_string()));
        assert_eq!(params[1], json!(["0xc0"]));
        assert_eq!(params[2], json!([recipient()]));
        assert_eq!(params[3], json!(["1500000000"]));
        assert_eq!(params[4], json!("20000000"));
        assert_eq!(
            transport.params_of("suix_getCoins")[1],
            json!("0x2::sui::SUI")
        );
    }

    #[tokio::test]
    async fn test_negative_fee_is_preserved() {
        let transport = happy().respond(
            "sui_dryRunTransactionBlock",
            json!({ "effects": effects("success", "100", "0", "500") }),
        );
        let prepared = pipeline(transport)
            .prepare(Some(SECRET), &TransferRequest::new(recipient(), "1"))
            .await
            .unwrap();
        assert_eq!(prepared.estimated_gas_fee(), -400);
    }

    #[tokio::test]
    async fn test_no_coins() {
        let transport = happy().respond(
            "suix_getCoins",
            json!({ "data": [], "nextCursor": null, "hasNextPage": false }),
        );
        let pipeline = pipeline(transport);
        let result = pipeline
            .prepare(Some(SECRET), &TransferRequest::new(recipient(), "1"))
            .await;
        assert_eq!(transfer_error(result), TransferError::NoFundsAvailable);
        assert_eq!(pipeline.provider().transport().methods(), vec!["suix_getCoins"]);
    }

    #[tokio::test]
    async fn test_build_rpc_error() {
        let transport = happy().fail(
            "unsafe_paySui",
            NetworkError::Rpc {
                code: -32002,
                message: "Insufficient gas".into(),
            },
        );
        let result = pipeline(transport)
            .prepare(Some(SECRET), &TransferRequest::new(recipient(), "1"))
            .await;
        let error = transfer_error(result);
        assert_eq!(error, TransferError::BuildFailed("Insufficient gas".into()));
        assert_eq!(error.stage(), TransferStage::Requested);
    }

    #[tokio::test]
    async fn test_estimation_rpc_error() {
        let transport = happy().fail(
            "sui_dryRunTransactionBlock",
            NetworkError::Rpc {
                code: -32602,
                message: "bad bytes".into(),
            },
        );
        let result = pipeline(transport)
            .prepare(Some(SECRET), &TransferRequest::new(recipient(), "1"))
            .await;
        assert_eq!(
            transfer_error(result),
            TransferError::EstimationFailed("bad bytes".into())
        );
    }

    #[tokio::test]
    async fn test_failed_dry_run_status() {
        let transport = happy().respond(
            "sui_dryRunTransactionBlock",
            json!({ "effects": effects("failure", "1000", "0", "0") }),
        );
        let result = pipeline(transport)
            .prepare(Some(SECRET), &TransferRequest::new(recipient(), "1"))
            .await;
        assert_eq!(
            transfer_error(result),
            TransferError::EstimationFailed("InsufficientGas".into())
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_stage_tagged() {
        let transport = happy().fail("suix_getCoins", NetworkError::Unavailable("down".into()));
        let result = pipeline(transport)
            .prepare(Some(SECRET), &TransferRequest::new(recipient(), "1"))
            .await;
        let error = transfer_error(result);
        assert!(matches!(
            error,
            TransferError::Network {
                stage: TransferStage::Requested,
                source: NetworkError::Unavailable(_)
            }
        ));
    }

    #[tokio::test]
    async fn test_send_happy_path() {
        let pipeline = pipeline(happy());
        let result = pipeline
            .send(Some(SECRET), &TransferRequest::new(recipient(), "1"))
            .await
            .unwrap();
        assert_eq!(result.digest, "TX1");
        assert_eq!(result.raw["digest"], json!("TX1"));

        let transport = pipeline.provider().transport();
        let params = transport.params_of("sui_executeTransactionBlock");
        assert_eq!(params[0], json!(STANDARD.encode(TX_BYTES)));
        assert_eq!(params[3], json!("WaitForLocalExecution"));

        // flag ‖ sig ‖ pubkey, over the raw bytes
        let signature = STANDARD.decode(params[1][0].as_str().unwrap()).unwrap();
        assert_eq!(signature.len(), 97);
        assert_eq!(signature[0], 0x00);
        assert_eq!(&signature[65..], &signer().public_key());
        let expected = signer().sign(&TX_BYTES).unwrap();
        assert_eq!(signature.as_slice(), expected.as_bytes().as_slice());
    }

    #[tokio::test]
    async fn test_execution_rpc_error() {
        let transport = happy().fail(
            "sui_executeTransactionBlock",
            NetworkError::Rpc {
                code: -32002,
                message: "ObjectVersionUnavailable".into(),
            },
        );
        let result = pipeline(transport)
            .send(Some(SECRET), &TransferRequest::new(recipient(), "1"))
            .await;
        let error = transfer_error(result);
        assert_eq!(
            error,
            TransferError::ExecutionFailed("ObjectVersionUnavailable".into())
        );
        assert_eq!(error.stage(), TransferStage::Submitted);
    }

    #[tokio::test]
    async fn test_execution_failure_status() {
        let transport = happy().respond(
            "sui_executeTransactionBlock",
            json!({ "digest": "TX2", "effects": effects("failure", "1000", "0", "0") }),
        );
        let result = pipeline(transport)
            .send(Some(SECRET), &TransferRequest::new(recipient(), "1"))
            .await;
        assert_eq!(
            transfer_error(result),
            TransferError::ExecutionFailed("InsufficientGas".into())
        );
    }

    #[tokio::test]
    async fn test_execute_timeout_is_indeterminate() {
        let transport = happy().fail(
            "sui_executeTransactionBlock",
            NetworkError::Timeout("deadline".into()),
        );
        let result = pipeline(transport)
            .send(Some(SECRET), &TransferRequest::new(recipient(), "1"))
            .await;
        assert!(matches!(
            transfer_error(result),
            TransferError::Indeterminate(message) if message.contains("deadline")
        ));
    }

    #[tokio::test]
    async fn test_undecodable_execute_response_is_indeterminate() {
        let transport = happy().respond("sui_executeTransactionBlock", json!({ "nope": 1 }));
        let result = pipeline(transport)
            .send(Some(SECRET), &TransferRequest::new(recipient(), "1"))
            .await;
        assert!(matches!(
            transfer_error(result),
            TransferError::Indeterminate(message) if message.contains("digest")
        ));
    }

    #[tokio::test]
    async fn test_gateway_error_after_submit_is_indeterminate() {
        let transport = happy().fail(
            "sui_executeTransactionBlock",
            NetworkError::Unavailable("HTTP 504 Gateway Timeout".into()),
        );
        let result = pipeline(transport)
            .send(Some(SECRET), &TransferRequest::new(recipient(), "1"))
            .await;
        let error = transfer_error(result);
        assert!(matches!(
            &error,
            TransferError::Indeterminate(message) if message.contains("504")
        ));
        assert_eq!(error.stage(), TransferStage::Submitted);
    }

    #[tokio::test]
    async fn test_connect_failure_at_submit_is_not_indeterminate() {
        let transport = happy().fail(
            "sui_executeTransactionBlock",
            NetworkError::Connect("connection refused".into()),
        );
        let result = pipeline(transport)
            .send(Some(SECRET), &TransferRequest::new(recipient(), "1"))
            .await;
        assert!(matches!(
            transfer_error(result),
            TransferError::Network {
                stage: TransferStage::Submitted,
                source: NetworkError::Connect(_)
            }
        ));
    }

    #[tokio::test]
    async fn test_timeout_before_submission_is_not_indeterminate() {
        let transport = happy().fail(
            "sui_dryRunTransactionBlock",
            NetworkError::Timeout("deadline".into()),
        );
        let result = pipeline(transport)
            .prepare(Some(SECRET), &TransferRequest::new(recipient(), "1"))
            .await;
        assert!(matches!(
            transfer_error(result),
            TransferError::Network {
                stage: TransferStage::Built,
                source: NetworkError::Timeout(_)
            }
        ));
    }

    #[tokio::test]
    async fn test_strict_normalizer_rejects_bad_secret() {
        let pipeline = pipeline(happy()).with_normalizer(KeyNormalizer::strict());
        let result = pipeline
            .prepare(Some("not a key"), &TransferRequest::new(recipient(), "1"))
            .await;
        assert!(result.is_err());
        assert_eq!(pipeline.provider().transport().call_count(), 0);
    }
}
