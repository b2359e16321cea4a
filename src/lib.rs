//! Workspace root package. No functionality of its own; exists to host
//! workspace-level tooling configuration (pre-commit hooks, etc.).
