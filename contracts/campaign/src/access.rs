use cosmwasm_std::{Addr, Deps, DepsMut, MessageInfo, Order, Response, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::AdminsResponse;
use crate::state::{Config, ADMINS, CONFIG};

const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 30;

/// Admin set membership, or the current treasury wallet.
pub fn is_privileged(storage: &dyn Storage, sender: &Addr) -> StdResult<bool> {
    if ADMINS.has(storage, sender) {
        return Ok(true);
    }
    let config: Config = CONFIG.load(storage)?;
    Ok(config.treasury_wallet == *sender)
}

pub fn assert_admin(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    if !is_privileged(storage, sender)? {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

pub fn execute_add_admin(
    deps: DepsMut,
    info: MessageInfo,
    wallet: String,
) -> Result<Response, ContractError> {
    assert_admin(deps.storage, &info.sender)?;

    let wallet = deps.api.addr_validate(&wallet)?;
    ADMINS.save(deps.storage, &wallet, &true)?;

    Ok(Response::new()
        .add_attribute("method", "add_admin")
        .add_attribute("wallet", wallet))
}

pub fn execute_remove_admin(
    deps: DepsMut,
    info: MessageInfo,
    wallet: String,
) -> Result<Response, ContractError> {
    assert_admin(deps.storage, &info.sender)?;

    let wallet = deps.api.addr_validate(&wallet)?;
    let removed = ADMINS.has(deps.storage, &wallet);
    ADMINS.remove(deps.storage, &wallet);

    Ok(Response::new()
        .add_attribute("method", "remove_admin")
        .add_attribute("wallet", wallet)
        .add_attribute("removed", removed.to_string()))
}

pub fn execute_change_treasury_wallet(
    deps: DepsMut,
    info: MessageInfo,
    wallet: String,
) -> Result<Response, ContractError> {
    assert_admin(deps.storage, &info.sender)?;

    let wallet = deps.api.addr_validate(&wallet)?;
    let mut config: Config = CONFIG.load(deps.storage)?;
    let old_wallet = config.treasury_wallet;
    config.treasury_wallet = wallet.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "change_treasury_wallet")
        .add_attribute("old_wallet", old_wallet)
        .add_attribute("new_wallet", wallet))
}

pub fn query_is_admin(deps: Deps, wallet: String) -> StdResult<bool> {
    let wallet = deps.api.addr_validate(&wallet)?;
    Ok(ADMINS.has(deps.storage, &wallet))
}

pub fn query_admins(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AdminsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = match start_after {
        Some(addr) => Some(deps.api.addr_validate(&addr)?),
        None => None,
    };
    let bound = start.as_ref().map(Bound::exclusive);

    let admins = ADMINS
        .keys(deps.storage, bound, None, Order::Ascending)
        .take(limit)
        .map(|key| key.map(String::from))
        .collect::<StdResult<Vec<String>>>()?;

    Ok(AdminsResponse { admins })
}

pub fn query_treasury_wallet(deps: Deps) -> StdResult<String> {
    let config: Config = CONFIG.load(deps.storage)?;
    Ok(config.treasury_wallet.to_string())
}
