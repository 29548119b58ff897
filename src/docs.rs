// SPDX-FileCopyrightText: The foliogrid authors
// SPDX-License-Identifier: MPL-2.0

//! Documentation of the project list format

#![allow(rustdoc::invalid_rust_codeblocks)] // Code blocks contain JSON and HTML, not Rust.
#![doc = include_str!("../README.md")]
