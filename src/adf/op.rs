use serde::{Deserialize, Serialize};

use crate::adf::Result;
use crate::adf::stack::Session;

/// One recorded stack-machine operation.
///
/// A host shim sitting between the decoder and a [`Session`] can record the
/// call sequence as `Op` values (they serialize with serde) and replay it
/// later against any session over the same buffer, without the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
	DictPush,
	DictFieldSet,
	ListPush,
	ListAppend,
	BoolPush { value: bool },
	S8Push { value: i8 },
	U8Push { value: u8 },
	S16Push { value: i16 },
	U16Push { value: u16 },
	S32Push { value: i32 },
	U32Push { value: u32 },
	S64Push { value: i64 },
	U64Push { value: u64 },
	F32Push { value: f32 },
	F64Push { value: f64 },
	Hash32Push { value: u32 },
	Hash48Push { value: u64 },
	Hash64Push { value: u64 },
	StrPush { offset: usize, size: usize },
	EnumPush { tag: u32, offset: usize, size: usize },
	S8sPush { offset: usize, count: usize },
	U8sPush { offset: usize, count: usize },
	S16sPush { offset: usize, count: usize },
	U16sPush { offset: usize, count: usize },
	S32sPush { offset: usize, count: usize },
	U32sPush { offset: usize, count: usize },
	S64sPush { offset: usize, count: usize },
	U64sPush { offset: usize, count: usize },
	F32sPush { offset: usize, count: usize },
	F64sPush { offset: usize, count: usize },
	HashRegister { hash: u64, offset: usize, size: usize },
	DbPrint { offset: usize, size: usize },
	DbWarn { offset: usize, size: usize },
	DbError { offset: usize, size: usize },
}

impl<'buf> Session<'buf> {
	/// Apply one recorded operation to this session.
	pub fn apply(&mut self, op: Op) -> Result<()> {
		match op {
			Op::DictPush => self.dict_push(),
			Op::DictFieldSet => return self.dict_field_set(),
			Op::ListPush => self.list_push(),
			Op::ListAppend => return self.list_append(),
			Op::BoolPush { value } => self.bool_push(value),
			Op::S8Push { value } => self.s8_push(value),
			Op::U8Push { value } => self.u8_push(value),
			Op::S16Push { value } => self.s16_push(value),
			Op::U16Push { value } => self.u16_push(value),
			Op::S32Push { value } => self.s32_push(value),
			Op::U32Push { value } => self.u32_push(value),
			Op::S64Push { value } => self.s64_push(value),
			Op::U64Push { value } => self.u64_push(value),
			Op::F32Push { value } => self.f32_push(value),
			Op::F64Push { value } => self.f64_push(value),
			Op::Hash32Push { value } => self.hash32_push(value),
			Op::Hash48Push { value } => self.hash48_push(value),
			Op::Hash64Push { value } => self.hash64_push(value),
			Op::StrPush { offset, size } => return self.str_push(offset, size),
			Op::EnumPush { tag, offset, size } => return self.enum_push(tag, offset, size),
			Op::S8sPush { offset, count } => return self.s8s_push(offset, count),
			Op::U8sPush { offset, count } => return self.u8s_push(offset, count),
			Op::S16sPush { offset, count } => return self.s16s_push(offset, count),
			Op::U16sPush { offset, count } => return self.u16s_push(offset, count),
			Op::S32sPush { offset, count } => return self.s32s_push(offset, count),
			Op::U32sPush { offset, count } => return self.u32s_push(offset, count),
			Op::S64sPush { offset, count } => return self.s64s_push(offset, count),
			Op::U64sPush { offset, count } => return self.u64s_push(offset, count),
			Op::F32sPush { offset, count } => return self.f32s_push(offset, count),
			Op::F64sPush { offset, count } => return self.f64s_push(offset, count),
			Op::HashRegister { hash, offset, size } => return self.hash_register(hash, offset, size),
			Op::DbPrint { offset, size } => return self.db_print(offset, size),
			Op::DbWarn { offset, size } => return self.db_warn(offset, size),
			Op::DbError { offset, size } => return self.db_error(offset, size),
		}
		Ok(())
	}

	/// Apply a recorded sequence in order, stopping at the first error.
	pub fn run(&mut self, ops: &[Op]) -> Result<()> {
		for op in ops {
			self.apply(*op)?;
		}
		Ok(())
	}
}
