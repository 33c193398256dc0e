//! # Status Flag Instructions
//!
//! Single sub-cycle flag sets and clears. CLD and SED are fatal: the 2A03
//! has no decimal mode, and a program touching it is depending on
//! behaviour this core does not provide.

use crate::cpu::CPU;
use crate::status;

pub(crate) fn execute_clc(cpu: &mut CPU) {
    cpu.p &= !status::C;
}

pub(crate) fn execute_cld(_cpu: &mut CPU) {
    panic!("CLD executed: decimal mode is not supported");
}

pub(crate) fn execute_cli(cpu: &mut CPU) {
    cpu.p &= !status::I;
}

pub(crate) fn execute_clv(cpu: &mut CPU) {
    cpu.p &= !status::V;
}

pub(crate) fn execute_sec(cpu: &mut CPU) {
    cpu.p |= status::C;
}

pub(crate) fn execute_sed(_cpu: &mut CPU) {
    panic!("SED executed: decimal mode is not supported");
}

pub(crate) fn execute_sei(cpu: &mut CPU) {
    cpu.p |= status::I;
}
