use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    function batchPostingReport(
        uint256 batchTimestamp,
        address batchPosterAddress,
        uint64 batchNumber,
        uint64 batchDataGas,
        uint256 l1BaseFeeWei
    ) external;
}
