//! Name-based invocation dispatch.
//!
//! The surface a request-dispatch collaborator calls: a function name plus
//! ordered string arguments, exactly as they arrive off the wire. Arity and
//! numeric parsing are enforced here; the typed operations stay string-free.
//! Successful calls return the serialized envelope of the resulting record
//! (empty for `instantiate`), so the caller can hand the bytes straight
//! back to its client.

use onet_ledger::{envelope, LedgerStore};

use crate::context::OptionContext;
use crate::contract::OptionContract;
use crate::error::ContractError;

impl OptionContract {
    /// Route `function(args…)` to the matching operation.
    ///
    /// Routed names: `instantiate`, `issue`, `buy`, `deliver`, `query`.
    ///
    /// # Errors
    /// [`ContractError::UnknownFunction`] for unrouted names;
    /// [`ContractError::InvalidArgument`] for wrong arity or non-integer
    /// numeric arguments; operation refusals propagate unchanged.
    pub async fn invoke<S: LedgerStore>(
        &self,
        ctx: &mut OptionContext<'_, S>,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        match function {
            "instantiate" => {
                expect_args(function, args, 0)?;
                self.instantiate(ctx).await?;
                Ok(Vec::new())
            }
            "issue" => {
                expect_args(function, args, 5)?;
                let face_value = parse_int("faceValue", &args[4])?;
                let option = self
                    .issue(ctx, &args[0], &args[1], &args[2], &args[3], face_value)
                    .await?;
                Ok(envelope::encode_state(&option)?)
            }
            "buy" => {
                expect_args(function, args, 6)?;
                let price = parse_int("price", &args[4])?;
                let option = self
                    .buy(ctx, &args[0], &args[1], &args[2], &args[3], price, &args[5])
                    .await?;
                Ok(envelope::encode_state(&option)?)
            }
            "deliver" => {
                expect_args(function, args, 4)?;
                let option = self
                    .deliver(ctx, &args[0], &args[1], &args[2], &args[3])
                    .await?;
                Ok(envelope::encode_state(&option)?)
            }
            "query" => {
                expect_args(function, args, 2)?;
                let option = self.query(ctx, &args[0], &args[1]).await?;
                Ok(envelope::encode_state(&option)?)
            }
            _ => Err(ContractError::UnknownFunction {
                name: function.to_string(),
            }),
        }
    }
}

fn expect_args(function: &str, args: &[String], want: usize) -> Result<(), ContractError> {
    if args.len() != want {
        return Err(ContractError::InvalidArgument {
            detail: format!("{function}: expected {want} arguments, got {}", args.len()),
        });
    }
    Ok(())
}

fn parse_int(field: &'static str, raw: &str) -> Result<i64, ContractError> {
    raw.parse::<i64>().map_err(|_| ContractError::InvalidArgument {
        detail: format!("{field}: expected an integer value, got {raw:?}"),
    })
}
