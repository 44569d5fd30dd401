//! Definitions of Solidity functions called during deployment

use alloy_sol_types::sol;

sol! {
    function initialize(
        bytes32 _initialStateRootHash,
        uint256 _initialL2BlockNumber,
        address _defaultVerifier,
        address _securityCouncil,
        address[] memory _operators,
        uint256 _rateLimitPeriodInSeconds,
        uint256 _rateLimitAmountInWei,
        uint256 _genesisTimestamp
    ) external;
}

sol! {
    /// The OpenZeppelin transparent upgradeable proxy, which deploys its own
    /// `ProxyAdmin` owned by `initialOwner` and forwards `_data` to the
    /// implementation as the initializer call
    contract TransparentUpgradeableProxy {
        constructor(address _logic, address initialOwner, bytes memory _data);
    }
}
