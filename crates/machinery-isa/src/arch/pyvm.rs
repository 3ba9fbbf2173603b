//! Python 2.6 virtual machine opcodes.
//!
//! The slice instructions form parameterized families: `SLICE+n` occupies
//! four consecutive codes starting at `SLICE`, and `SLICE_0` is an alias of
//! the family's base opcode.

define_opcodes! {
    /// Python 2.6 bytecode instruction set.
    pub enum PyOpcode {
        StopCode("STOP_CODE")                      = 0x00,
        PopTop("POP_TOP")                          = 0x01,
        RotTwo("ROT_TWO")                          = 0x02,
        RotThree("ROT_THREE")                      = 0x03,
        DupTop("DUP_TOP")                          = 0x04,
        RotFour("ROT_FOUR")                        = 0x05,
        Nop("NOP")                                 = 0x09,
        UnaryPositive("UNARY_POSITIVE")            = 0x0a,
        UnaryNegative("UNARY_NEGATIVE")            = 0x0b,
        UnaryNot("UNARY_NOT")                      = 0x0c,
        UnaryConvert("UNARY_CONVERT")              = 0x0d,
        UnaryInvert("UNARY_INVERT")                = 0x0f,
        ListAppend("LIST_APPEND")                  = 0x12,
        BinaryPower("BINARY_POWER")                = 0x13,
        BinaryMultiply("BINARY_MULTIPLY")          = 0x14,
        BinaryDivide("BINARY_DIVIDE")              = 0x15,
        BinaryModulo("BINARY_MODULO")              = 0x16,
        BinaryAdd("BINARY_ADD")                    = 0x17,
        BinarySubtract("BINARY_SUBTRACT")          = 0x18,
        BinarySubscr("BINARY_SUBSCR")              = 0x19,
        BinaryFloorDivide("BINARY_FLOOR_DIVIDE")   = 0x1a,
        BinaryTrueDivide("BINARY_TRUE_DIVIDE")     = 0x1b,
        InplaceFloorDivide("INPLACE_FLOOR_DIVIDE") = 0x1c,
        InplaceTrueDivide("INPLACE_TRUE_DIVIDE")   = 0x1d,
        Slice("SLICE")                             = 0x1e,
        Slice0("SLICE_0")                          = 0x1e => Slice,
        Slice1("SLICE_1")                          = 0x1f,
        Slice2("SLICE_2")                          = 0x20,
        Slice3("SLICE_3")                          = 0x21,
        StoreSlice("STORE_SLICE")                  = 0x28,
        StoreSlice0("STORE_SLICE_0")               = 0x28 => StoreSlice,
        StoreSlice1("STORE_SLICE_1")               = 0x29,
        StoreSlice2("STORE_SLICE_2")               = 0x2a,
        StoreSlice3("STORE_SLICE_3")               = 0x2b,
        DeleteSlice("DELETE_SLICE")                = 0x32,
        DeleteSlice0("DELETE_SLICE_0")             = 0x32 => DeleteSlice,
        DeleteSlice1("DELETE_SLICE_1")             = 0x33,
        DeleteSlice2("DELETE_SLICE_2")             = 0x34,
        DeleteSlice3("DELETE_SLICE_3")             = 0x35,
        StoreMap("STORE_MAP")                      = 0x36,
        InplaceAdd("INPLACE_ADD")                  = 0x37,
        InplaceSubtract("INPLACE_SUBTRACT")        = 0x38,
        InplaceMultiply("INPLACE_MULTIPLY")        = 0x39,
        InplaceDivide("INPLACE_DIVIDE")            = 0x3a,
        InplaceModulo("INPLACE_MODULO")            = 0x3b,
        StoreSubscr("STORE_SUBSCR")                = 0x3c,
        DeleteSubscr("DELETE_SUBSCR")              = 0x3d,
        BinaryLshift("BINARY_LSHIFT")              = 0x3e,
        BinaryRshift("BINARY_RSHIFT")              = 0x3f,
        BinaryAnd("BINARY_AND")                    = 0x40,
        BinaryXor("BINARY_XOR")                    = 0x41,
        BinaryOr("BINARY_OR")                      = 0x42,
        InplacePower("INPLACE_POWER")              = 0x43,
        GetIter("GET_ITER")                        = 0x44,
        PrintExpr("PRINT_EXPR")                    = 0x46,
        PrintItem("PRINT_ITEM")                    = 0x47,
        PrintNewline("PRINT_NEWLINE")              = 0x48,
        PrintItemTo("PRINT_ITEM_TO")               = 0x49,
        PrintNewlineTo("PRINT_NEWLINE_TO")         = 0x4a,
        InplaceLshift("INPLACE_LSHIFT")            = 0x4b,
        InplaceRshift("INPLACE_RSHIFT")            = 0x4c,
        InplaceAnd("INPLACE_AND")                  = 0x4d,
        InplaceXor("INPLACE_XOR")                  = 0x4e,
        InplaceOr("INPLACE_OR")                    = 0x4f,
        BreakLoop("BREAK_LOOP")                    = 0x50,
        WithCleanup("WITH_CLEANUP")                = 0x51,
        LoadLocals("LOAD_LOCALS")                  = 0x52,
        ReturnValue("RETURN_VALUE")                = 0x53,
        ImportStar("IMPORT_STAR")                  = 0x54,
        ExecStmt("EXEC_STMT")                      = 0x55,
        YieldValue("YIELD_VALUE")                  = 0x56,
        PopBlock("POP_BLOCK")                      = 0x57,
        EndFinally("END_FINALLY")                  = 0x58,
        BuildClass("BUILD_CLASS")                  = 0x59,
        StoreName("STORE_NAME")                    = 0x5a,
        DeleteName("DELETE_NAME")                  = 0x5b,
        UnpackSequence("UNPACK_SEQUENCE")          = 0x5c,
        ForIter("FOR_ITER")                        = 0x5d,
        StoreAttr("STORE_ATTR")                    = 0x5f,
        DeleteAttr("DELETE_ATTR")                  = 0x60,
        StoreGlobal("STORE_GLOBAL")                = 0x61,
        DeleteGlobal("DELETE_GLOBAL")              = 0x62,
        DupTopx("DUP_TOPX")                        = 0x63,
        LoadConst("LOAD_CONST")                    = 0x64,
        LoadName("LOAD_NAME")                      = 0x65,
        BuildTuple("BUILD_TUPLE")                  = 0x66,
        BuildList("BUILD_LIST")                    = 0x67,
        BuildMap("BUILD_MAP")                      = 0x68,
        LoadAttr("LOAD_ATTR")                      = 0x69,
        CompareOp("COMPARE_OP")                    = 0x6a,
        ImportName("IMPORT_NAME")                  = 0x6b,
        ImportFrom("IMPORT_FROM")                  = 0x6c,
        JumpForward("JUMP_FORWARD")                = 0x6e,
        JumpIfFalse("JUMP_IF_FALSE")               = 0x6f,
        JumpIfTrue("JUMP_IF_TRUE")                 = 0x70,
        JumpAbsolute("JUMP_ABSOLUTE")              = 0x71,
        LoadGlobal("LOAD_GLOBAL")                  = 0x74,
        ContinueLoop("CONTINUE_LOOP")              = 0x77,
        SetupLoop("SETUP_LOOP")                    = 0x78,
        SetupExcept("SETUP_EXCEPT")                = 0x79,
        SetupFinally("SETUP_FINALLY")              = 0x7a,
        LoadFast("LOAD_FAST")                      = 0x7c,
        StoreFast("STORE_FAST")                    = 0x7d,
        DeleteFast("DELETE_FAST")                  = 0x7e,
        RaiseVarargs("RAISE_VARARGS")              = 0x82,
        CallFunction("CALL_FUNCTION")              = 0x83,
        MakeFunction("MAKE_FUNCTION")              = 0x84,
        BuildSlice("BUILD_SLICE")                  = 0x85,
        MakeClosure("MAKE_CLOSURE")                = 0x86,
        LoadClosure("LOAD_CLOSURE")                = 0x87,
        LoadDeref("LOAD_DEREF")                    = 0x88,
        StoreDeref("STORE_DEREF")                  = 0x89,
        CallFunctionVar("CALL_FUNCTION_VAR")       = 0x8c,
        CallFunctionKw("CALL_FUNCTION_KW")         = 0x8d,
        CallFunctionVarKw("CALL_FUNCTION_VAR_KW")  = 0x8e,
        ExtendedArg("EXTENDED_ARG")                = 0x8f,
    }
}
