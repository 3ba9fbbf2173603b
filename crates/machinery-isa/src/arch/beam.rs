//! Erlang virtual machine (BEAM) opcodes.
//!
//! Generated with `machinery extract --format rust --align` from the Erlang
//! compiler's `beam_opcodes.erl`.

define_opcodes! {
    /// BEAM instruction set.
    pub enum BeamOpcode {
        Label("LABEL")                            = 0x01,
        FuncInfo("FUNC_INFO")                     = 0x02,
        IntCodeEnd("INT_CODE_END")                = 0x03,
        Call("CALL")                              = 0x04,
        CallLast("CALL_LAST")                     = 0x05,
        CallOnly("CALL_ONLY")                     = 0x06,
        CallExt("CALL_EXT")                       = 0x07,
        CallExtLast("CALL_EXT_LAST")              = 0x08,
        Bif0("BIF0")                              = 0x09,
        Bif1("BIF1")                              = 0x0a,
        Bif2("BIF2")                              = 0x0b,
        Allocate("ALLOCATE")                      = 0x0c,
        AllocateHeap("ALLOCATE_HEAP")             = 0x0d,
        AllocateZero("ALLOCATE_ZERO")             = 0x0e,
        AllocateHeapZero("ALLOCATE_HEAP_ZERO")    = 0x0f,
        TestHeap("TEST_HEAP")                     = 0x10,
        Init("INIT")                              = 0x11,
        Deallocate("DEALLOCATE")                  = 0x12,
        Return("RETURN")                          = 0x13,
        Send("SEND")                              = 0x14,
        RemoveMessage("REMOVE_MESSAGE")           = 0x15,
        Timeout("TIMEOUT")                        = 0x16,
        LoopRec("LOOP_REC")                       = 0x17,
        LoopRecEnd("LOOP_REC_END")                = 0x18,
        Wait("WAIT")                              = 0x19,
        WaitTimeout("WAIT_TIMEOUT")               = 0x1a,
        MPlus("M_PLUS")                           = 0x1b,
        MMinus("M_MINUS")                         = 0x1c,
        MTimes("M_TIMES")                         = 0x1d,
        MDiv("M_DIV")                             = 0x1e,
        IntDiv("INT_DIV")                         = 0x1f,
        IntRem("INT_REM")                         = 0x20,
        IntBand("INT_BAND")                       = 0x21,
        IntBor("INT_BOR")                         = 0x22,
        IntBxor("INT_BXOR")                       = 0x23,
        IntBsl("INT_BSL")                         = 0x24,
        IntBsr("INT_BSR")                         = 0x25,
        IntBnot("INT_BNOT")                       = 0x26,
        IsLt("IS_LT")                             = 0x27,
        IsGe("IS_GE")                             = 0x28,
        IsEq("IS_EQ")                             = 0x29,
        IsNe("IS_NE")                             = 0x2a,
        IsEqExact("IS_EQ_EXACT")                  = 0x2b,
        IsNeExact("IS_NE_EXACT")                  = 0x2c,
        IsInteger("IS_INTEGER")                   = 0x2d,
        IsFloat("IS_FLOAT")                       = 0x2e,
        IsNumber("IS_NUMBER")                     = 0x2f,
        IsAtom("IS_ATOM")                         = 0x30,
        IsPid("IS_PID")                           = 0x31,
        IsReference("IS_REFERENCE")               = 0x32,
        IsPort("IS_PORT")                         = 0x33,
        IsNil("IS_NIL")                           = 0x34,
        IsBinary("IS_BINARY")                     = 0x35,
        IsConstant("IS_CONSTANT")                 = 0x36,
        IsList("IS_LIST")                         = 0x37,
        IsNonemptyList("IS_NONEMPTY_LIST")        = 0x38,
        IsTuple("IS_TUPLE")                       = 0x39,
        TestArity("TEST_ARITY")                   = 0x3a,
        SelectVal("SELECT_VAL")                   = 0x3b,
        SelectTupleArity("SELECT_TUPLE_ARITY")    = 0x3c,
        Jump("JUMP")                              = 0x3d,
        Catch("CATCH")                            = 0x3e,
        CatchEnd("CATCH_END")                     = 0x3f,
        Move("MOVE")                              = 0x40,
        GetList("GET_LIST")                       = 0x41,
        GetTupleElement("GET_TUPLE_ELEMENT")      = 0x42,
        SetTupleElement("SET_TUPLE_ELEMENT")      = 0x43,
        PutString("PUT_STRING")                   = 0x44,
        PutList("PUT_LIST")                       = 0x45,
        PutTuple("PUT_TUPLE")                     = 0x46,
        Put("PUT")                                = 0x47,
        Badmatch("BADMATCH")                      = 0x48,
        IfEnd("IF_END")                           = 0x49,
        CaseEnd("CASE_END")                       = 0x4a,
        CallFun("CALL_FUN")                       = 0x4b,
        MakeFun("MAKE_FUN")                       = 0x4c,
        IsFunction("IS_FUNCTION")                 = 0x4d,
        CallExtOnly("CALL_EXT_ONLY")              = 0x4e,
        BsStartMatch("BS_START_MATCH")            = 0x4f,
        BsGetInteger("BS_GET_INTEGER")            = 0x50,
        BsGetFloat("BS_GET_FLOAT")                = 0x51,
        BsGetBinary("BS_GET_BINARY")              = 0x52,
        BsSkipBits("BS_SKIP_BITS")                = 0x53,
        BsTestTail("BS_TEST_TAIL")                = 0x54,
        BsSave("BS_SAVE")                         = 0x55,
        BsRestore("BS_RESTORE")                   = 0x56,
        BsInit("BS_INIT")                         = 0x57,
        BsFinal("BS_FINAL")                       = 0x58,
        BsPutInteger("BS_PUT_INTEGER")            = 0x59,
        BsPutBinary("BS_PUT_BINARY")              = 0x5a,
        BsPutFloat("BS_PUT_FLOAT")                = 0x5b,
        BsPutString("BS_PUT_STRING")              = 0x5c,
        BsNeedBuf("BS_NEED_BUF")                  = 0x5d,
        Fclearerror("FCLEARERROR")                = 0x5e,
        Fcheckerror("FCHECKERROR")                = 0x5f,
        Fmove("FMOVE")                            = 0x60,
        Fconv("FCONV")                            = 0x61,
        Fadd("FADD")                              = 0x62,
        Fsub("FSUB")                              = 0x63,
        Fmul("FMUL")                              = 0x64,
        Fdiv("FDIV")                              = 0x65,
        Fnegate("FNEGATE")                        = 0x66,
        MakeFun2("MAKE_FUN2")                     = 0x67,
        Try("TRY")                                = 0x68,
        TryEnd("TRY_END")                         = 0x69,
        TryCase("TRY_CASE")                       = 0x6a,
        TryCaseEnd("TRY_CASE_END")                = 0x6b,
        Raise("RAISE")                            = 0x6c,
        BsInit2("BS_INIT2")                       = 0x6d,
        BsBitsToBytes("BS_BITS_TO_BYTES")         = 0x6e,
        BsAdd("BS_ADD")                           = 0x6f,
        Apply("APPLY")                            = 0x70,
        ApplyLast("APPLY_LAST")                   = 0x71,
        IsBoolean("IS_BOOLEAN")                   = 0x72,
        IsFunction2("IS_FUNCTION2")               = 0x73,
        BsStartMatch2("BS_START_MATCH2")          = 0x74,
        BsGetInteger2("BS_GET_INTEGER2")          = 0x75,
        BsGetFloat2("BS_GET_FLOAT2")              = 0x76,
        BsGetBinary2("BS_GET_BINARY2")            = 0x77,
        BsSkipBits2("BS_SKIP_BITS2")              = 0x78,
        BsTestTail2("BS_TEST_TAIL2")              = 0x79,
        BsSave2("BS_SAVE2")                       = 0x7a,
        BsRestore2("BS_RESTORE2")                 = 0x7b,
        GcBif1("GC_BIF1")                         = 0x7c,
        GcBif2("GC_BIF2")                         = 0x7d,
        BsFinal2("BS_FINAL2")                     = 0x7e,
        BsBitsToBytes2("BS_BITS_TO_BYTES2")       = 0x7f,
        PutLiteral("PUT_LITERAL")                 = 0x80,
        IsBitstr("IS_BITSTR")                     = 0x81,
        BsContextToBinary("BS_CONTEXT_TO_BINARY") = 0x82,
        BsTestUnit("BS_TEST_UNIT")                = 0x83,
        BsMatchString("BS_MATCH_STRING")          = 0x84,
        BsInitWritable("BS_INIT_WRITABLE")        = 0x85,
        BsAppend("BS_APPEND")                     = 0x86,
        BsPrivateAppend("BS_PRIVATE_APPEND")      = 0x87,
        Trim("TRIM")                              = 0x88,
        BsInitBits("BS_INIT_BITS")                = 0x89,
        BsGetUtf8("BS_GET_UTF8")                  = 0x8a,
        BsSkipUtf8("BS_SKIP_UTF8")                = 0x8b,
        BsGetUtf16("BS_GET_UTF16")                = 0x8c,
        BsSkipUtf16("BS_SKIP_UTF16")              = 0x8d,
        BsGetUtf32("BS_GET_UTF32")                = 0x8e,
        BsSkipUtf32("BS_SKIP_UTF32")              = 0x8f,
        BsUtf8Size("BS_UTF8_SIZE")                = 0x90,
        BsPutUtf8("BS_PUT_UTF8")                  = 0x91,
        BsUtf16Size("BS_UTF16_SIZE")              = 0x92,
        BsPutUtf16("BS_PUT_UTF16")                = 0x93,
        BsPutUtf32("BS_PUT_UTF32")                = 0x94,
    }
}
