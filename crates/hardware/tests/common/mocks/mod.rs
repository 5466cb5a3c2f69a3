//! Mock implementations of the cache's collaborators.
