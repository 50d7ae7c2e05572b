//! Unit tests for attribute parsing.

mod type_utils;
