#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::access::{
    assert_admin, execute_add_admin, execute_change_treasury_wallet, execute_remove_admin,
    query_admins, query_is_admin, query_treasury_wallet,
};
use crate::error::ContractError;
use crate::ledger::{
    execute_register_wallet, execute_swap_points, execute_update_participant_claims,
    execute_update_participant_id, execute_withdraw, query_all_participants, query_count,
    query_participant, query_participant_index, query_participants, query_wallet_registered,
};
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, PayoutTokenMsg, QueryMsg,
    TotalsResponse,
};
use crate::state::{
    validate_ratio, validate_service_fee, CampaignState, Config, Parameters, PayoutToken, Totals,
    ADMINS, CAMPAIGN_STATE, CONFIG, PARAMETERS, TOTALS,
};
use crate::treasury::{execute_deposit, execute_withdraw_remaining_funds, receive_cw20};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:campaign";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let treasury_wallet = match msg.treasury_wallet {
        Some(wallet) => deps.api.addr_validate(&wallet)?,
        None => info.sender.clone(),
    };
    let payout_token = match msg.payout_token {
        PayoutTokenMsg::Native { denom } => {
            if denom.is_empty() {
                return Err(ContractError::InvalidParameter {
                    reason: "payout denom must not be empty".to_string(),
                });
            }
            PayoutToken::Native { denom }
        }
        PayoutTokenMsg::Cw20 { contract_addr } => PayoutToken::Cw20 {
            contract_addr: deps.api.addr_validate(&contract_addr)?,
        },
    };

    let params = Parameters {
        ratio: msg.ratio,
        max_reward_total: msg.max_reward_total,
        minimum_amount: msg.minimum_amount,
        service_fee: msg.service_fee,
    };
    params.validate()?;

    CONFIG.save(
        deps.storage,
        &Config {
            treasury_wallet: treasury_wallet.clone(),
            payout_token,
        },
    )?;
    PARAMETERS.save(deps.storage, &params)?;
    CAMPAIGN_STATE.save(deps.storage, &CampaignState::Active)?;
    TOTALS.save(deps.storage, &Totals::default())?;
    ADMINS.save(deps.storage, &info.sender, &true)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", info.sender)
        .add_attribute("treasury_wallet", treasury_wallet))
}

/************************************ Execution *************************************/

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddAdmin { wallet } => execute_add_admin(deps, info, wallet),
        ExecuteMsg::RemoveAdmin { wallet } => execute_remove_admin(deps, info, wallet),
        ExecuteMsg::ChangeTreasuryWallet { wallet } => {
            execute_change_treasury_wallet(deps, info, wallet)
        }
        ExecuteMsg::ChangeMaxReward { amount } => execute_change_max_reward(deps, info, amount),
        ExecuteMsg::ChangeRatio { ratio } => execute_change_ratio(deps, info, ratio),
        ExecuteMsg::SetMinimumAmount { amount } => execute_set_minimum_amount(deps, info, amount),
        ExecuteMsg::SetServiceFee { fee } => execute_set_service_fee(deps, info, fee),
        ExecuteMsg::ChangeState { state } => {
            // unauthorized callers get Unauthorized before the code is decoded
            assert_admin(deps.storage, &info.sender)?;
            execute_change_state(deps, info, CampaignState::from_code(state)?)
        }
        ExecuteMsg::SetStateActive {} => execute_change_state(deps, info, CampaignState::Active),
        ExecuteMsg::SetStateClosed {} => execute_change_state(deps, info, CampaignState::Closed),
        ExecuteMsg::RegisterWallet { wallet, user_id } => {
            execute_register_wallet(deps, info, wallet, user_id)
        }
        ExecuteMsg::UpdateParticipantClaims {
            index,
            claimed,
            claimable,
        } => execute_update_participant_claims(deps, info, index, claimed, claimable),
        ExecuteMsg::UpdateParticipantId { index, user_id } => {
            execute_update_participant_id(deps, info, index, user_id)
        }
        ExecuteMsg::SwapMtePointsToMatic {
            point_amount,
            index,
        } => execute_swap_points(deps, info, point_amount, index),
        ExecuteMsg::WithdrawMaticTokens { index, amount } => {
            execute_withdraw(deps, env, info, index, amount)
        }
        ExecuteMsg::Deposit {} => execute_deposit(deps, info),
        ExecuteMsg::Receive(msg) => receive_cw20(deps, info, msg),
        ExecuteMsg::WithdrawRemainingFunds { receiver } => {
            execute_withdraw_remaining_funds(deps, env, info, receiver)
        }
    }
}

fn update_parameters<F>(
    deps: DepsMut,
    info: &MessageInfo,
    update: F,
) -> Result<Parameters, ContractError>
where
    F: FnOnce(&mut Parameters) -> Result<(), ContractError>,
{
    assert_admin(deps.storage, &info.sender)?;

    let mut params: Parameters = PARAMETERS.load(deps.storage)?;
    update(&mut params)?;
    PARAMETERS.save(deps.storage, &params)?;
    Ok(params)
}

pub fn execute_change_max_reward(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    update_parameters(deps, &info, |params| {
        params.max_reward_total = amount;
        Ok(())
    })?;

    Ok(Response::new()
        .add_attribute("method", "change_max_reward")
        .add_attribute("max_reward_total", amount))
}

pub fn execute_change_ratio(
    deps: DepsMut,
    info: MessageInfo,
    ratio: u64,
) -> Result<Response, ContractError> {
    update_parameters(deps, &info, |params| {
        validate_ratio(ratio)?;
        params.ratio = ratio;
        Ok(())
    })?;

    Ok(Response::new()
        .add_attribute("method", "change_ratio")
        .add_attribute("ratio", ratio.to_string()))
}

pub fn execute_set_minimum_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    update_parameters(deps, &info, |params| {
        params.minimum_amount = amount;
        Ok(())
    })?;

    Ok(Response::new()
        .add_attribute("method", "set_minimum_amount")
        .add_attribute("minimum_amount", amount))
}

pub fn execute_set_service_fee(
    deps: DepsMut,
    info: MessageInfo,
    fee: u64,
) -> Result<Response, ContractError> {
    update_parameters(deps, &info, |params| {
        validate_service_fee(fee)?;
        params.service_fee = fee;
        Ok(())
    })?;

    Ok(Response::new()
        .add_attribute("method", "set_service_fee")
        .add_attribute("service_fee", fee.to_string()))
}

pub fn execute_change_state(
    deps: DepsMut,
    info: MessageInfo,
    next: CampaignState,
) -> Result<Response, ContractError> {
    assert_admin(deps.storage, &info.sender)?;

    let current = CAMPAIGN_STATE.load(deps.storage)?;
    let next = current.transition(next)?;
    CAMPAIGN_STATE.save(deps.storage, &next)?;

    Ok(Response::new()
        .add_attribute("method", "change_state")
        .add_attribute("old_state", current.to_string())
        .add_attribute("state", next.to_string()))
}

/************************************ Query *************************************/

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IsAdmin { wallet } => to_binary(&query_is_admin(deps, wallet)?),
        QueryMsg::Admins { start_after, limit } => {
            to_binary(&query_admins(deps, start_after, limit)?)
        }
        QueryMsg::TreasuryWallet {} => to_binary(&query_treasury_wallet(deps)?),
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Ratio {} => to_binary(&PARAMETERS.load(deps.storage)?.ratio),
        QueryMsg::MaxRewardTotal {} => to_binary(&PARAMETERS.load(deps.storage)?.max_reward_total),
        QueryMsg::GetMinimumAmount {} => to_binary(&PARAMETERS.load(deps.storage)?.minimum_amount),
        QueryMsg::GetServiceFee {} => to_binary(&PARAMETERS.load(deps.storage)?.service_fee),
        QueryMsg::GetState {} => to_binary(&CAMPAIGN_STATE.load(deps.storage)?.code()),
        QueryMsg::WalletRegistered { wallet } => {
            to_binary(&query_wallet_registered(deps, wallet)?)
        }
        QueryMsg::ParticipantIndex { wallet } => {
            to_binary(&query_participant_index(deps, wallet)?)
        }
        QueryMsg::ParticipantsCount {} => to_binary(&query_count(deps)?),
        QueryMsg::GetParticipant { index } => to_binary(&query_participant(deps, index)?),
        QueryMsg::GetParticipants { page, limit } => {
            to_binary(&query_participants(deps, page, limit)?)
        }
        QueryMsg::GetAllParticipants {} => to_binary(&query_all_participants(deps)?),
        QueryMsg::Totals {} => to_binary(&TotalsResponse {
            data: TOTALS.load(deps.storage)?,
        }),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config: Config = CONFIG.load(deps.storage)?;
    let params: Parameters = PARAMETERS.load(deps.storage)?;
    let state = CAMPAIGN_STATE.load(deps.storage)?;

    let payout_token = match config.payout_token {
        PayoutToken::Native { denom } => PayoutTokenMsg::Native { denom },
        PayoutToken::Cw20 { contract_addr } => PayoutTokenMsg::Cw20 {
            contract_addr: contract_addr.to_string(),
        },
    };

    Ok(ConfigResponse {
        treasury_wallet: config.treasury_wallet.to_string(),
        payout_token,
        ratio: params.ratio,
        max_reward_total: params.max_reward_total,
        minimum_amount: params.minimum_amount,
        service_fee: params.service_fee,
        state: state.code(),
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
