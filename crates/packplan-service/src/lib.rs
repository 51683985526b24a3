//! Packplan Service - HTTP front end for the pack-combination solver
//!
//! A thin axum layer around [`packplan_solver::solve`]: one `POST
//! /calculate` endpoint that validates the requested quantity, runs the
//! solver, and serializes the resulting distribution plus the derived
//! shipped total. All algorithmic work lives in `packplan-solver`.

pub mod api;
