/*
 * mod.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Text helpers shared by the writers.

pub mod escape;
pub mod markers;
pub mod uri;
