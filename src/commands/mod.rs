// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod dashboard;
pub mod expenses;
pub mod incomes;
pub mod users;
pub mod epaper;
pub mod exporter;
pub mod doctor;
pub mod settings;
