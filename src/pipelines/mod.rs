// SPDX-License-Identifier: GPL-3.0-only

//! Rendering pipelines

pub mod background;
