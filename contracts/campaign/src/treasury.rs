use cosmwasm_std::{
    coins, from_binary, to_binary, Addr, BankMsg, CosmosMsg, Deps, DepsMut, Env, MessageInfo,
    Response, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, Cw20ReceiveMsg};
use cw_utils::{may_pay, must_pay, nonpayable};

use crate::access::assert_admin;
use crate::error::ContractError;
use crate::msg::Cw20HookMsg;
use crate::state::{CampaignState, Config, PayoutToken, Totals, CAMPAIGN_STATE, CONFIG, TOTALS};

/// Contract's own balance of the payout token.
pub fn available_funds(
    deps: Deps,
    env: &Env,
    token: &PayoutToken,
) -> Result<Uint128, ContractError> {
    let balance = match token {
        PayoutToken::Native { denom } => {
            deps.querier
                .query_balance(env.contract.address.to_string(), denom.clone())?
                .amount
        }
        PayoutToken::Cw20 { contract_addr } => {
            let res: BalanceResponse = deps.querier.query_wasm_smart(
                contract_addr.to_string(),
                &Cw20QueryMsg::Balance {
                    address: env.contract.address.to_string(),
                },
            )?;
            res.balance
        }
    };
    Ok(balance)
}

pub fn transfer_msg(
    token: &PayoutToken,
    recipient: &Addr,
    amount: Uint128,
) -> Result<CosmosMsg, ContractError> {
    let msg = match token {
        PayoutToken::Native { denom } => CosmosMsg::Bank(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: coins(amount.u128(), denom.clone()),
        }),
        PayoutToken::Cw20 { contract_addr } => CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: contract_addr.to_string(),
            msg: to_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        }),
    };
    Ok(msg)
}

/// Funds attached to a call. Only the native payout denom is accepted; a
/// cw20-paid campaign takes no native funds at all.
pub fn attached_deposit(token: &PayoutToken, info: &MessageInfo) -> Result<Uint128, ContractError> {
    match token {
        PayoutToken::Native { denom } => Ok(may_pay(info, denom)?),
        PayoutToken::Cw20 { .. } => {
            nonpayable(info)?;
            Ok(Uint128::zero())
        }
    }
}

pub fn record_deposit(deps: DepsMut, amount: Uint128) -> Result<Totals, ContractError> {
    let mut totals: Totals = TOTALS.load(deps.storage)?;
    totals.total_deposited = totals.total_deposited.checked_add(amount)?;
    TOTALS.save(deps.storage, &totals)?;
    Ok(totals)
}

pub fn execute_deposit(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config: Config = CONFIG.load(deps.storage)?;
    let amount = match &config.payout_token {
        PayoutToken::Native { denom } => must_pay(&info, denom)?,
        PayoutToken::Cw20 { .. } => {
            return Err(ContractError::InvalidParameter {
                reason: "cw20 payout token is deposited through send".to_string(),
            })
        }
    };
    record_deposit(deps, amount)?;

    Ok(Response::new()
        .add_attribute("method", "deposit")
        .add_attribute("depositor", info.sender)
        .add_attribute("amount", amount))
}

pub fn receive_cw20(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config: Config = CONFIG.load(deps.storage)?;

    match from_binary(&cw20_msg.msg)? {
        Cw20HookMsg::Deposit {} => {
            // only the payout token contract can execute this message
            match &config.payout_token {
                PayoutToken::Cw20 { contract_addr } if *contract_addr == info.sender => {}
                _ => return Err(ContractError::Unauthorized {}),
            }

            let depositor = deps.api.addr_validate(&cw20_msg.sender)?;
            record_deposit(deps, cw20_msg.amount)?;

            Ok(Response::new()
                .add_attribute("method", "deposit")
                .add_attribute("depositor", depositor)
                .add_attribute("amount", cw20_msg.amount))
        }
    }
}

pub fn execute_withdraw_remaining_funds(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receiver: Option<String>,
) -> Result<Response, ContractError> {
    assert_admin(deps.storage, &info.sender)?;

    let state = CAMPAIGN_STATE.load(deps.storage)?;
    if state != CampaignState::Finalized {
        return Err(ContractError::InvalidPhase {
            state: state.to_string(),
        });
    }

    let config: Config = CONFIG.load(deps.storage)?;
    let receiver = match receiver {
        Some(receiver) => deps.api.addr_validate(&receiver)?,
        None => config.treasury_wallet.clone(),
    };

    let balance = available_funds(deps.as_ref(), &env, &config.payout_token)?;
    let mut response = Response::new()
        .add_attribute("method", "withdraw_remaining_funds")
        .add_attribute("receiver", receiver.to_string())
        .add_attribute("amount", balance);
    if !balance.is_zero() {
        response = response.add_message(transfer_msg(&config.payout_token, &receiver, balance)?);
    }

    Ok(response)
}
