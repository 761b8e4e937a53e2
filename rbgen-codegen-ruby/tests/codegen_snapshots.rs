//! Snapshot tests for ruby code generation.
//!
//! The version banner is stripped before comparing so a release bump does not
//! churn every snapshot.

use rbgen_codegen_ruby::{Generator, GeneratorOptions, LanguageCodegen, Layout};
use rbgen_ir::{
    ConstDef, ConstValue, EnumDef, Field, Function, Program, Schema, Service, StructDef, Type,
    TypeRef,
};

/// Preview a schema and return `(path, content)` pairs in generation order.
fn generate_files(schema: &Schema, options: GeneratorOptions) -> Vec<(String, String)> {
    Generator::new(schema, options)
        .preview()
        .expect("generation failed")
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> &'a str {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
        .unwrap_or_else(|| panic!("{path} not generated"))
}

/// Everything after the banner and the blank line closing it.
fn body(content: &str) -> &str {
    content
        .split_once("KNOW WHAT YOU ARE DOING\n#\n\n")
        .expect("banner missing")
        .1
}

fn example_schema() -> Schema {
    Schema::new(vec![
        Program::new("example")
            .with_enum(
                EnumDef::new("Color")
                    .value("RED", 0)
                    .value("GREEN", 1)
                    .value("BLUE", 2),
            )
            .with_struct(
                StructDef::structure("Person")
                    .field(Field::new(1, "name", Type::String).required())
                    .field(Field::new(2, "age", Type::I32).optional())
                    .field(
                        Field::new(3, "favorite", Type::Enum(TypeRef::new("example", "Color")))
                            .optional(),
                    ),
            ),
    ])
}

#[test]
fn test_flat_types_file() {
    let files = generate_files(&example_schema(), GeneratorOptions::default());
    let types = get_file(&files, "example_types.rb");

    insta::assert_snapshot!(body(types), @r#"
require 'thrift'

module Color
  RED = 0
  GREEN = 1
  BLUE = 2
  VALUE_MAP = {0 => "RED", 1 => "GREEN", 2 => "BLUE"}
  VALID_VALUES = Set.new([RED, GREEN, BLUE]).freeze
end

class Person; end

class Person
  include ::Thrift::Struct, ::Thrift::Struct_Union
  NAME = 1
  AGE = 2
  FAVORITE = 3

  FIELDS = {
    NAME => {:type => ::Thrift::Types::STRING, :name => 'name'},
    AGE => {:type => ::Thrift::Types::I32, :name => 'age', :optional => true},
    FAVORITE => {:type => ::Thrift::Types::I32, :name => 'favorite', :optional => true, :enum_class => ::Color}
  }

  def struct_fields; FIELDS; end

  def validate
    raise ::Thrift::ProtocolException.new(::Thrift::ProtocolException::INVALID_DATA, 'Required field name is unset!') unless @name
    unless @favorite.nil? || ::Color::VALID_VALUES.include?(@favorite)
      raise ::Thrift::ProtocolException.new(::Thrift::ProtocolException::INVALID_DATA, 'Invalid value of field favorite!')
    end
  end

  ::Thrift::Struct.generate_accessors self
end
"#);
}

#[test]
fn test_autoload_enum_and_struct_units() {
    let options = GeneratorOptions {
        layout: Layout::Autoload,
        ..Default::default()
    };
    let files = generate_files(&example_schema(), options);
    let paths: Vec<_> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(paths, vec!["color.rb", "person.rb"]);

    let person = get_file(&files, "person.rb");
    assert!(person.contains(
        "FAVORITE => {:type => ::Thrift::Types::I32, :name => 'favorite', :optional => true, :enum_name => '::Color'}"
    ));
    assert!(!person.contains(":enum_class"));
    assert!(!person.contains("class Person; end"));
}

#[test]
fn test_autoload_oneway_client() {
    let schema = Schema::new(vec![
        Program::new("ops")
            .with_namespace("rb", "ops")
            .with_service(Service::new("health").function(Function::new("ping", Type::Void).oneway())),
    ]);
    let options = GeneratorOptions {
        layout: Layout::Autoload,
        ..Default::default()
    };
    let files = generate_files(&schema, options);
    let client = get_file(&files, "ops/health/client.rb");

    insta::assert_snapshot!(body(client), @r"
require 'thrift'

module Ops
  module Health
    class Client
      include ::Thrift::Client

      def ping()
        send_ping()
      end

      def send_ping()
        send_oneway_message('ping', PingArgs)
      end

    end

  end

end
");
}

#[test]
fn test_set_constant_is_frozen() {
    let schema = Schema::new(vec![
        Program::new("conf")
            .with_const(ConstDef::new(
                "TAGS",
                Type::set(Type::String),
                ConstValue::List(vec![ConstValue::string("a"), ConstValue::string("b")]),
            ))
            .with_const(ConstDef::new(
                "PORTS",
                Type::list(Type::I32),
                ConstValue::List(vec![ConstValue::Integer(80)]),
            )),
    ]);
    let files = generate_files(&schema, GeneratorOptions::default());
    let constants = get_file(&files, "conf_constants.rb");

    insta::assert_snapshot!(body(constants), @r#"
require 'thrift'
require 'conf_types'

TAGS = Set.new([
  %q"a",
  %q"b",
]).freeze

PORTS = [
  80,
]
"#);
}

#[test]
fn test_container_and_enum_field_defaults() {
    let schema = Schema::new(vec![
        Program::new("conf")
            .with_enum(EnumDef::new("Level").value("LOW", 0).value("HIGH", 5))
            .with_struct(
                StructDef::structure("Settings")
                    .field(
                        Field::new(1, "ports", Type::list(Type::I32)).with_default(ConstValue::List(
                            vec![ConstValue::Integer(80), ConstValue::Integer(443)],
                        )),
                    )
                    .field(
                        Field::new(2, "limits", Type::map(Type::String, Type::I32)).with_default(
                            ConstValue::Map(vec![(ConstValue::string("cpu"), ConstValue::Integer(2))]),
                        ),
                    )
                    .field(
                        Field::new(3, "tags", Type::set(Type::String))
                            .with_default(ConstValue::List(vec![ConstValue::string("a")])),
                    )
                    .field(
                        Field::new(4, "level", Type::Enum(TypeRef::new("conf", "Level")))
                            .with_default(ConstValue::identifier("Level.HIGH")),
                    ),
            ),
    ]);
    let files = generate_files(&schema, GeneratorOptions::default());
    let types = get_file(&files, "conf_types.rb");

    // enum defaults are bare integers; only :enum_class names the enum
    insta::assert_snapshot!(body(types), @r#"
require 'thrift'

module Level
  LOW = 0
  HIGH = 5
  VALUE_MAP = {0 => "LOW", 5 => "HIGH"}
  VALID_VALUES = Set.new([LOW, HIGH]).freeze
end

class Settings; end

class Settings
  include ::Thrift::Struct, ::Thrift::Struct_Union
  PORTS = 1
  LIMITS = 2
  TAGS = 3
  LEVEL = 4

  FIELDS = {
    PORTS => {:type => ::Thrift::Types::LIST, :name => 'ports', :default => [
      80,
      443,
    ], :element => {:type => ::Thrift::Types::I32}},
    LIMITS => {:type => ::Thrift::Types::MAP, :name => 'limits', :default => {
      %q"cpu" => 2,
    }, :key => {:type => ::Thrift::Types::STRING}, :value => {:type => ::Thrift::Types::I32}},
    TAGS => {:type => ::Thrift::Types::SET, :name => 'tags', :default => Set.new([
      %q"a",
    ]).freeze, :element => {:type => ::Thrift::Types::STRING}},
    LEVEL => {:type => ::Thrift::Types::I32, :name => 'level', :default => 5, :enum_class => ::Level}
  }

  def struct_fields; FIELDS; end

  def validate
    unless @level.nil? || ::Level::VALID_VALUES.include?(@level)
      raise ::Thrift::ProtocolException.new(::Thrift::ProtocolException::INVALID_DATA, 'Invalid value of field level!')
    end
  end

  ::Thrift::Struct.generate_accessors self
end
"#);
}

#[test]
fn test_union_field_default() {
    let schema = Schema::new(vec![
        Program::new("conf").with_struct(
            StructDef::union("Choice")
                .field(Field::new(1, "count", Type::I32).with_default(ConstValue::Integer(7)))
                .field(Field::new(2, "label", Type::String)),
        ),
    ]);
    let files = generate_files(&schema, GeneratorOptions::default());
    let types = get_file(&files, "conf_types.rb");

    insta::assert_snapshot!(body(types), @r"
require 'thrift'

class Choice < ::Thrift::Union; end

class Choice < ::Thrift::Union
  include ::Thrift::Struct_Union
  class << self
    def count(val)
      Choice.new(:count, val)
    end

    def label(val)
      Choice.new(:label, val)
    end
  end

  COUNT = 1
  LABEL = 2

  FIELDS = {
    COUNT => {:type => ::Thrift::Types::I32, :name => 'count', :default => 7},
    LABEL => {:type => ::Thrift::Types::STRING, :name => 'label'}
  }

  def struct_fields; FIELDS; end

  def validate
    raise ::Thrift::ProtocolException.new(::Thrift::ProtocolException::INVALID_DATA, 'Union fields are not set.') if get_set_field.nil? || get_value.nil?
  end

  ::Thrift::Union.generate_accessors self
end
");
}

fn calculator_schema() -> Schema {
    Schema::new(vec![
        Program::new("calc")
            .with_struct(StructDef::exception("DivByZero").field(Field::new(1, "why", Type::String)))
            .with_service(
                Service::new("Calculator")
                    .function(Function::new("ping", Type::Void).oneway())
                    .function(
                        Function::new("divide", Type::I32)
                            .arg(Field::new(1, "a", Type::I32))
                            .arg(Field::new(2, "b", Type::I32))
                            .throws(Field::new(
                                1,
                                "e",
                                Type::Exception(TypeRef::new("calc", "DivByZero")),
                            )),
                    ),
            ),
    ])
}

#[test]
fn test_flat_service_file() {
    let files = generate_files(&calculator_schema(), GeneratorOptions::default());
    let paths: Vec<_> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(
        paths,
        vec!["calc_types.rb", "calc_constants.rb", "calculator.rb"]
    );

    let service = body(get_file(&files, "calculator.rb"));
    assert!(service.starts_with("require 'thrift'\nrequire 'calc_types'\n\nmodule Calculator\n  class Client\n"));

    // oneway: fire and forget on both sides
    assert!(!service.contains("recv_ping"));
    assert!(service.contains(
        "    def process_ping(seqid, iprot, oprot)\n      args = read_args(iprot, Ping_args)\n      @handler.ping()\n      return\n    end\n"
    ));

    assert!(service.contains(
        "      result = receive_message(Divide_result)\n      \
         return result.success unless result.success.nil?\n      \
         raise result.e unless result.e.nil?\n      \
         raise ::Thrift::ApplicationException.new(::Thrift::ApplicationException::MISSING_RESULT, 'divide failed: unknown result')\n"
    ));
    assert!(service.contains("  # HELPER FUNCTIONS AND STRUCTURES\n\n  class Ping_args\n"));
    assert!(service.contains(
        "      SUCCESS => {:type => ::Thrift::Types::I32, :name => 'success'},\n      \
         E => {:type => ::Thrift::Types::STRUCT, :name => 'e', :class => ::DivByZero}\n"
    ));
    assert!(service.ends_with("  end\n\nend\n\n"));
}

#[test]
fn test_exception_message_constructor() {
    let files = generate_files(&calculator_schema(), GeneratorOptions::default());
    let types = get_file(&files, "calc_types.rb");
    assert!(types.contains("class DivByZero < ::Thrift::Exception; end\n"));
    assert!(types.contains("  def message; why end\n"));
}

#[test]
fn test_rubygems_require() {
    let options = GeneratorOptions::parse(["rubygems"]).unwrap();
    let files = generate_files(&calculator_schema(), options);
    for (path, content) in &files {
        assert!(
            body(content).starts_with("require 'rubygems'\nrequire 'thrift'\n"),
            "{path} lacks the rubygems require"
        );
    }
}

#[test]
fn test_docs_become_comments() {
    let schema = Schema::new(vec![
        Program::new("docs").with_struct(
            StructDef::structure("Point")
                .with_doc("A point.\n\nIn 2D.")
                .field(Field::new(1, "x", Type::Double).with_doc("Abscissa")),
        ),
    ]);
    let files = generate_files(&schema, GeneratorOptions::default());
    let types = get_file(&files, "docs_types.rb");
    assert!(types.contains("# A point.\n#\n# In 2D.\nclass Point\n"));
    assert!(types.contains("    # Abscissa\n    X => {:type => ::Thrift::Types::DOUBLE, :name => 'x'}\n"));
}
