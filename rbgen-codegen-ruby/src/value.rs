//! Ruby literals for constant values.

use rbgen_codegen::CodeBuilder;
use rbgen_ir::{ConstValue, Type};

use crate::{Context, Error, Result};

/// Write the ruby literal for `value`, typed as `ty`, at the current position.
///
/// The caller has already written the indentation and anything preceding the
/// literal on its line. Containers continue on new lines one level deeper and
/// leave the cursor right after their closing bracket.
pub fn render_const_value(
    ctx: &Context<'_>,
    out: &mut CodeBuilder,
    ty: &Type,
    value: &ConstValue,
) -> Result<()> {
    match ty.resolved() {
        Type::String | Type::Binary | Type::Uuid => {
            let s = expect_str(ty, value)?;
            out.push_raw(&quote(s));
        }
        Type::Bool => {
            let b = expect_integer(ty, value)? > 0;
            out.push_raw(if b { "true" } else { "false" });
        }
        Type::I8 | Type::I16 | Type::I32 | Type::I64 => {
            out.push_raw(&expect_integer(ty, value)?.to_string());
        }
        Type::Double => match value {
            ConstValue::Integer(i) => {
                out.push_raw(&i.to_string());
            }
            ConstValue::Double(d) => {
                out.push_raw(&format_double(*d));
            }
            other => return Err(literal_mismatch(ty, other)),
        },
        Type::Enum(r) => {
            let n = match value {
                ConstValue::Integer(i) => *i,
                ConstValue::Identifier(name) => {
                    let member = name.rsplit('.').next().unwrap_or(name);
                    let def = ctx.find_enum(r)?;
                    def.find_value(member)
                        .map(|v| i64::from(v.value))
                        .ok_or_else(|| {
                            Error::schema_mismatch(ty.describe(), format!("has no value {member}"))
                        })?
                }
                other => return Err(literal_mismatch(ty, other)),
            };
            out.push_raw(&n.to_string());
        }
        Type::Struct(r) | Type::Union(r) | Type::Exception(r) => {
            let def = ctx.find_record(ty)?;
            let entries = expect_map(ty, value)?;
            out.push_raw(&format!("{}.new({{\n", ctx.full_type_name(r)?));
            out.push_indent();
            for (key, val) in entries {
                let name = key
                    .as_str()
                    .ok_or_else(|| literal_mismatch(&Type::String, key))?;
                let field = def.find_field(name).ok_or_else(|| {
                    Error::schema_mismatch(&def.name, format!("has no field {name}"))
                })?;
                out.push_indented(&quote(name)).push_raw(" => ");
                render_const_value(ctx, out, &field.ty, val)?;
                out.push_raw(",\n");
            }
            out.push_dedent().push_indented("})");
        }
        Type::Map { key, value: val_ty } => {
            let entries = expect_map(ty, value)?;
            out.push_raw("{\n").push_indent();
            for (k, v) in entries {
                out.push_indented("");
                render_const_value(ctx, out, key, k)?;
                out.push_raw(" => ");
                render_const_value(ctx, out, val_ty, v)?;
                out.push_raw(",\n");
            }
            out.push_dedent().push_indented("}");
        }
        Type::List { elem } | Type::Set { elem } => {
            let is_set = matches!(ty.resolved(), Type::Set { .. });
            let items = match value {
                ConstValue::List(items) => items,
                other => return Err(literal_mismatch(ty, other)),
            };
            out.push_raw(if is_set { "Set.new([\n" } else { "[\n" });
            out.push_indent();
            for item in items {
                out.push_indented("");
                render_const_value(ctx, out, elem, item)?;
                out.push_raw(",\n");
            }
            out.push_dedent()
                .push_indented(if is_set { "]).freeze" } else { "]" });
        }
        Type::Void | Type::Typedef { .. } => {
            return Err(Error::unsupported_const_type(ty.describe()));
        }
    }
    Ok(())
}

/// Render a value into a fresh string, starting at indentation level zero.
pub fn const_value_to_string(ctx: &Context<'_>, ty: &Type, value: &ConstValue) -> Result<String> {
    let mut out = CodeBuilder::ruby();
    render_const_value(ctx, &mut out, ty, value)?;
    Ok(out.build())
}

/// `%q"..."` literal with `\\`, `"`, `\r`, `\n` and `\t` escaped.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    out.push_str("%q\"");
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn format_double(d: f64) -> String {
    if d.is_nan() {
        "Float::NAN".to_string()
    } else if d.is_infinite() {
        if d > 0.0 {
            "Float::INFINITY".to_string()
        } else {
            "-Float::INFINITY".to_string()
        }
    } else {
        format!("{d:?}")
    }
}

fn expect_integer(ty: &Type, value: &ConstValue) -> Result<i64> {
    value.as_integer().ok_or_else(|| literal_mismatch(ty, value))
}

fn expect_str<'v>(ty: &Type, value: &'v ConstValue) -> Result<&'v str> {
    match value {
        ConstValue::String(s) => Ok(s),
        other => Err(literal_mismatch(ty, other)),
    }
}

fn expect_map<'v>(ty: &Type, value: &'v ConstValue) -> Result<&'v [(ConstValue, ConstValue)]> {
    match value {
        ConstValue::Map(entries) => Ok(entries),
        other => Err(literal_mismatch(ty, other)),
    }
}

fn literal_mismatch(ty: &Type, value: &ConstValue) -> Box<Error> {
    Error::schema_mismatch(
        ty.describe(),
        format!("cannot hold a {} literal", value.kind()),
    )
}

#[cfg(test)]
mod tests {
    use rbgen_ir::{EnumDef, Field, Program, Schema, StructDef, TypeRef};

    use super::*;
    use crate::GeneratorOptions;

    fn schema() -> Schema {
        Schema::new(vec![
            Program::new("shop")
                .with_namespace("rb", "shop")
                .with_enum(EnumDef::new("Color").value("RED", 0).value("GREEN", 1))
                .with_struct(
                    StructDef::structure("Point")
                        .field(Field::new(1, "x", Type::I32))
                        .field(Field::new(2, "y", Type::I32)),
                ),
        ])
    }

    fn render(ty: &Type, value: &ConstValue) -> Result<String> {
        let schema = schema();
        let ctx = Context::new(&schema, GeneratorOptions::default());
        const_value_to_string(&ctx, ty, value)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(&Type::I64, &ConstValue::Integer(-7)).unwrap(), "-7");
        assert_eq!(render(&Type::Bool, &ConstValue::Integer(1)).unwrap(), "true");
        assert_eq!(render(&Type::Bool, &ConstValue::Integer(0)).unwrap(), "false");
        assert_eq!(
            render(&Type::String, &ConstValue::string("hi")).unwrap(),
            "%q\"hi\""
        );
        assert_eq!(
            render(&Type::Uuid, &ConstValue::string("00000000-0000-0000-0000-000000000000"))
                .unwrap(),
            "%q\"00000000-0000-0000-0000-000000000000\""
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(quote("a\"b\\c\nd\te\r"), "%q\"a\\\"b\\\\c\\nd\\te\\r\"");
    }

    #[test]
    fn test_double_keeps_integer_token() {
        assert_eq!(render(&Type::Double, &ConstValue::Integer(3)).unwrap(), "3");
        assert_eq!(render(&Type::Double, &ConstValue::Double(2.5)).unwrap(), "2.5");
        assert_eq!(render(&Type::Double, &ConstValue::Double(2.0)).unwrap(), "2.0");
        assert_eq!(
            render(&Type::Double, &ConstValue::Double(f64::INFINITY)).unwrap(),
            "Float::INFINITY"
        );
    }

    #[test]
    fn test_enum_renders_bare_integer() {
        let color = Type::Enum(TypeRef::new("shop", "Color"));
        assert_eq!(render(&color, &ConstValue::Integer(1)).unwrap(), "1");
        assert_eq!(
            render(&color, &ConstValue::identifier("Color.GREEN")).unwrap(),
            "1"
        );
        let err = render(&color, &ConstValue::identifier("Color.PINK")).unwrap_err();
        assert!(matches!(*err, Error::SchemaMismatch { .. }));
    }

    #[test]
    fn test_map_preserves_order() {
        let ty = Type::map(Type::String, Type::I32);
        let value = ConstValue::Map(vec![
            (ConstValue::string("z"), ConstValue::Integer(1)),
            (ConstValue::string("a"), ConstValue::Integer(2)),
        ]);
        assert_eq!(
            render(&ty, &value).unwrap(),
            "{\n  %q\"z\" => 1,\n  %q\"a\" => 2,\n}"
        );
    }

    #[test]
    fn test_set_and_list_wrappers_differ() {
        let items = ConstValue::List(vec![ConstValue::Integer(1), ConstValue::Integer(2)]);
        assert_eq!(
            render(&Type::list(Type::I32), &items).unwrap(),
            "[\n  1,\n  2,\n]"
        );
        assert_eq!(
            render(&Type::set(Type::I32), &items).unwrap(),
            "Set.new([\n  1,\n  2,\n]).freeze"
        );
    }

    #[test]
    fn test_struct_literal() {
        let ty = Type::Struct(TypeRef::new("shop", "Point"));
        let value = ConstValue::Map(vec![
            (ConstValue::string("y"), ConstValue::Integer(2)),
            (ConstValue::string("x"), ConstValue::Integer(1)),
        ]);
        assert_eq!(
            render(&ty, &value).unwrap(),
            "::Shop::Point.new({\n  %q\"y\" => 2,\n  %q\"x\" => 1,\n})"
        );
    }

    #[test]
    fn test_struct_literal_unknown_field() {
        let ty = Type::Struct(TypeRef::new("shop", "Point"));
        let value = ConstValue::Map(vec![(ConstValue::string("z"), ConstValue::Integer(2))]);
        let err = render(&ty, &value).unwrap_err();
        assert_eq!(err.to_string(), "type error: Point has no field z");
    }

    #[test]
    fn test_nested_containers_indent() {
        let ty = Type::list(Type::map(Type::I32, Type::set(Type::String)));
        let value = ConstValue::List(vec![ConstValue::Map(vec![(
            ConstValue::Integer(1),
            ConstValue::List(vec![ConstValue::string("a")]),
        )])]);
        assert_eq!(
            render(&ty, &value).unwrap(),
            "[\n  {\n    1 => Set.new([\n      %q\"a\",\n    ]).freeze,\n  },\n]"
        );
    }

    #[test]
    fn test_typedef_is_transparent() {
        let ty = Type::typedef("UserId", Type::I64);
        assert_eq!(render(&ty, &ConstValue::Integer(42)).unwrap(), "42");
    }

    #[test]
    fn test_void_is_unsupported() {
        let err = render(&Type::Void, &ConstValue::Integer(0)).unwrap_err();
        assert!(matches!(*err, Error::UnsupportedConstType { .. }));
    }
}
