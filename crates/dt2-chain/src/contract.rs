//! ABI binding for `contracts/DataType2.sol`.

alloy::sol! {
    #[sol(rpc)]
    contract DataType2 {
        function getMessage() external view returns (string memory);
        function setMessage(string memory _message) external;

        function getNumber(uint256 index) external view returns (uint256);
        function addNumber(uint256 num) external;
        function getNumbers() external view returns (uint256[] memory);

        function addName(string memory name) external;
        function getNames() external view returns (string[] memory);

        function setBalance(address account, uint256 value) external;
        function getBalance(address account) external view returns (uint256);

        function setUser(address account, string memory name, uint256 age) external;
        function getUser(address account) external view returns (string memory name, uint256 age);

        function setFixedData(bytes32 data) external;
        function getFixedData() external view returns (bytes32);

        function setDynamicData(bytes memory data) external;
        function getDynamicData() external view returns (bytes memory);

        function getDetails() external view returns (
            string memory message,
            uint256[] memory numbers,
            string[] memory names,
            bytes32 fixedData,
            bytes memory dynamicData
        );
    }
}
