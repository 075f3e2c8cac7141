//! Decomposition low-pass filters (`dec_lo`, PyWavelets ordering) for every
//! registered wavelet family, in the same order as the reduction table.
//!
//! Daubechies filters are the minimum-phase spectral factors, Symlets the
//! least-asymmetric ones, and Coiflets have `2N` vanishing wavelet moments
//! and `2N - 1` vanishing scaling moments around the filter peak.

#[rustfmt::skip]
pub(super) const DEC_LO: &[(&str, &[f64])] = &[
    ("db1", &[
        0.707_106_781_186_547_6, 0.707_106_781_186_547_6,
    ]),
    ("db2", &[
        -0.129_409_522_551_260_37, 0.224_143_868_042_013_4, 0.836_516_303_737_807_9,
        0.482_962_913_144_534_16,
    ]),
    ("db3", &[
        0.035_226_291_885_709_53, -0.085_441_273_882_026_66, -0.135_011_020_010_254_58,
        0.459_877_502_118_491_54, 0.806_891_509_311_092_5, 0.332_670_552_950_082_63,
    ]),
    ("db4", &[
        -0.010_597_401_785_069_032, 0.032_883_011_666_885_2, 0.030_841_381_835_560_764,
        -0.187_034_811_719_093_09, -0.027_983_769_416_859_854, 0.630_880_767_929_858_9,
        0.714_846_570_552_915_7, 0.230_377_813_308_896_5,
    ]),
    ("db5", &[
        0.003_335_725_285_473_771_2, -0.012_580_751_999_081_999, -0.006_241_490_212_798_274,
        0.077_571_493_840_045_72, -0.032_244_869_584_638_375, -0.242_294_887_066_382_03,
        0.138_428_145_901_320_74, 0.724_308_528_437_772_9, 0.603_829_269_797_189_6,
        0.160_102_397_974_192_93,
    ]),
    ("db6", &[
        -0.001_077_301_085_308_479_6, 0.004_777_257_510_945_511, 0.000_553_842_201_161_496_1,
        -0.031_582_039_317_486_03, 0.027_522_865_530_305_727, 0.097_501_605_587_323_04,
        -0.129_766_867_567_261_94, -0.226_264_693_965_439_83, 0.315_250_351_709_197_63,
        0.751_133_908_021_095_4, 0.494_623_890_398_453_06, 0.111_540_743_350_109_47,
    ]),
    ("db7", &[
        0.000_353_713_799_974_520_24, -0.001_801_640_704_047_490_8, 0.000_429_577_972_921_366_5,
        0.012_550_998_556_099_84, -0.016_574_541_630_666_88, -0.038_029_936_935_014_41,
        0.080_612_609_151_083_08, 0.071_309_219_266_830_26, -0.224_036_184_993_874_98,
        -0.143_906_003_928_564_98, 0.469_782_287_405_193_1, 0.729_132_090_846_235_1,
        0.396_539_319_481_917_3, 0.077_852_054_085_009_18,
    ]),
    ("db8", &[
        -0.000_117_476_784_124_769_53, 0.000_675_449_406_450_569_3, -0.000_391_740_373_376_947_05,
        -0.004_870_352_993_451_574, 0.008_746_094_047_405_777, 0.013_981_027_917_398_282,
        -0.044_088_253_930_794_755, -0.017_369_301_001_807_547, 0.128_747_426_620_478_47,
        0.000_472_484_573_913_282_8, -0.284_015_542_961_546_9, -0.015_829_105_256_349_306,
        0.585_354_683_654_206_7, 0.675_630_736_297_289_8, 0.312_871_590_914_299_95,
        0.054_415_842_243_104_01,
    ]),
    ("db9", &[
        3.934_732_031_627_16e-5, -0.000_251_963_188_942_710_1, 0.000_230_385_763_523_195_97,
        0.001_847_646_883_056_226_5, -0.004_281_503_682_463_43, -0.004_723_204_757_751_397,
        0.022_361_662_123_679_096, 0.000_250_947_114_831_451_97, -0.067_632_829_061_329_97,
        0.030_725_681_479_333_38, 0.148_540_749_338_106_38, -0.096_840_783_222_976_46,
        -0.293_273_783_279_174_9, 0.133_197_385_825_007_56, 0.657_288_078_051_300_5,
        0.604_823_123_690_111_2, 0.243_834_674_612_590_34, 0.038_077_947_363_878_345,
    ]),
    ("db10", &[
        -1.326_420_289_452_124_4e-5, 9.358_867_032_006_959e-5, -0.000_116_466_855_129_285_45,
        -0.000_685_856_694_959_711_6, 0.001_992_405_295_185_056, 0.001_395_351_747_052_901,
        -0.010_733_175_483_330_575, 0.003_606_553_566_956_169_7, 0.033_212_674_059_341,
        -0.029_457_536_821_875_813, -0.071_394_147_166_397_08, 0.093_057_364_603_572_35,
        0.127_369_340_335_793_25, -0.195_946_274_377_377_05, -0.249_846_424_327_315_38,
        0.281_172_343_660_577_5, 0.688_459_039_453_603_5, 0.527_201_188_931_725_6,
        0.188_176_800_077_691_5, 0.026_670_057_900_555_554,
    ]),
    ("db11", &[
        4.494_274_277_236_51e-6, -3.463_498_418_698_499_6e-5, 5.443_907_469_936_847_5e-5,
        0.000_249_152_523_552_823_5, -0.000_893_023_250_666_264_6, -0.000_308_592_858_815_143_2,
        0.004_928_417_656_059_041, -0.003_340_858_873_014_445_4, -0.015_364_820_906_201_6,
        0.020_840_904_360_181_062, 0.031_335_090_219_046_076, -0.066_438_785_695_025_2,
        -0.046_479_955_116_684_187, 0.149_812_012_466_378_49, 0.066_043_588_196_683_2,
        -0.274_230_846_817_946_96, -0.162_275_245_027_490_36, 0.411_964_368_947_907_44,
        0.685_686_774_916_200_6, 0.449_899_764_356_045_34, 0.144_067_021_150_624_5,
        0.018_694_297_761_471_083,
    ]),
    ("db12", &[
        -1.529_071_758_068_511e-6, 1.277_695_221_937_976_7e-5, -2.424_154_575_703_078_5e-5,
        -8.850_410_920_820_432e-5, 0.000_388_653_062_820_931_43, 6.545_128_212_509_596e-6,
        -0.002_179_503_618_627_760_3, 0.002_248_607_240_995_237_8, 0.006_711_499_008_795_51,
        -0.012_840_825_198_300_683, -0.012_218_649_069_748_28, 0.041_546_277_495_084_44,
        0.010_849_130_255_822_185, -0.096_432_120_096_507_08, 0.005_359_569_674_352_15,
        0.182_478_605_927_579_67, -0.023_779_257_256_069_726, -0.316_178_453_752_785_5,
        -0.044_763_885_653_774_63, 0.515_886_478_427_815_7, 0.657_198_722_579_307_1,
        0.377_355_135_214_212_66, 0.109_566_272_821_185_15, 0.013_112_257_957_229_518,
    ]),
    ("db13", &[
        5.220_035_098_454_864e-7, -4.700_416_479_360_868e-6, 1.044_193_057_140_813_8e-5,
        3.067_853_757_932_549_6e-5, -0.000_165_128_988_556_505_5, 4.925_152_512_628_946_4e-5,
        0.000_932_326_130_867_263_3, -0.001_315_673_911_892_299, -0.002_761_911_234_656_862_2,
        0.007_255_589_401_617_566, 0.003_923_941_448_797_416, -0.023_831_420_710_323_65,
        0.002_379_972_254_059_078_6, 0.056_139_477_100_283_43, -0.026_488_406_475_343_694,
        -0.105_807_618_187_934_33, 0.072_948_933_656_777_17, 0.179_476_079_429_339_85,
        -0.124_576_730_750_815_25, -0.314_972_907_711_388_64, 0.086_985_726_179_647_24,
        0.588_889_570_431_218_9, 0.611_055_851_158_787_7, 0.311_996_322_160_438_04,
        0.082_861_243_872_902_78, 0.009_202_133_538_962_367,
    ]),
    ("db14", &[
        -1.787_139_968_311_359_2e-7, 1.724_994_675_367_812_7e-6, -4.389_704_901_781_394e-6,
        -1.033_720_918_457_077_4e-5, 6.875_504_252_697_51e-5, -4.177_724_577_037_259_6e-5,
        -0.000_386_831_947_312_954_5, 0.000_708_021_154_235_527_9, 0.001_061_691_085_606_762,
        -0.003_849_638_868_022_187_4, -0.000_746_218_989_268_385, 0.012_789_493_266_333_41,
        -0.005_615_049_530_356_959, -0.030_185_351_540_390_634, 0.026_981_408_307_912_916,
        0.055_237_126_259_216_04, -0.071_548_955_504_046_14, -0.086_748_411_568_169_69,
        0.139_989_016_584_460_7, 0.138_395_213_864_806_6, -0.218_033_529_993_276_05,
        -0.271_688_552_278_748_05, 0.218_670_687_758_906_52, 0.631_187_849_104_856_8,
        0.554_305_617_940_893_8, 0.254_850_267_792_621_4, 0.062_364_758_849_398_9,
        0.006_461_153_460_087_948,
    ]),
    ("db15", &[
        6.133_359_913_305_752e-8, -6.316_882_325_881_664e-7, 1.811_270_407_940_577_2e-6,
        3.362_987_181_737_58e-6, -2.813_329_626_604_781_4e-5, 2.579_269_915_531_893_6e-5,
        0.000_155_896_489_920_599_73, -0.000_359_565_244_362_468_8, -0.000_373_482_354_137_617,
        0.001_943_323_980_382_211_4, -0.000_241_756_490_761_624_27, -0.006_487_734_560_315_745,
        0.005_101_000_360_407_543, 0.015_083_918_027_835_902, -0.020_810_050_169_693_083,
        -0.025_767_007_328_439_964, 0.054_780_550_584_507_61, 0.033_877_143_923_507_685,
        -0.111_120_936_037_231_7, -0.039_666_176_555_790_945, 0.190_146_714_007_123,
        0.065_282_952_848_772_82, -0.288_882_596_566_965_63, -0.193_204_139_609_145_43,
        0.339_002_535_454_731_5, 0.645_813_140_357_424_3, 0.492_631_771_708_139_6,
        0.206_023_863_986_995_74, 0.046_743_394_892_766_27, 0.004_538_537_361_578_899,
    ]),
    ("db16", &[
        -2.109_339_630_100_743e-8, 2.308_784_086_857_545_7e-7, -7.363_656_785_451_205e-7,
        -1.043_571_342_311_606_6e-6, 1.133_660_866_127_625_8e-5, -1.394_566_898_820_889_3e-5,
        -6.103_596_621_410_936e-5, 0.000_174_787_245_225_338_17, 0.000_114_241_520_038_722_39,
        -0.000_941_021_749_359_567_6, 0.000_407_896_980_849_712_85, 0.003_128_023_381_206_269,
        -0.003_644_279_621_498_39, -0.006_990_014_563_413_916, 0.013_993_768_859_828_731,
        0.010_297_659_640_955_97, -0.036_888_397_691_730_14, -0.007_588_974_368_857_738,
        0.075_924_236_044_276_31, -0.006_239_722_752_474_872, -0.132_388_305_563_810_4,
        0.027_340_263_752_716_042, 0.211_190_693_947_104_3, -0.027_918_208_133_028_276,
        -0.327_063_310_527_917_7, -0.089_751_089_402_489_64, 0.440_290_256_886_356_9,
        0.637_356_332_083_789, 0.430_312_722_846_003_8, 0.165_064_283_488_853_13,
        0.034_907_714_323_673_344, 0.003_189_220_925_347_738,
    ]),
    ("db17", &[
        7.267_492_968_561_608_5e-9, -8.423_948_446_002_68e-8, 2.957_700_933_316_857e-7,
        3.016_549_609_994_557_3e-7, -4.505_942_477_222_988e-6, 6.990_600_985_076_751_5e-6,
        2.318_681_379_874_595_2e-5, -8.204_803_202_453_391e-5, -2.561_010_956_654_845_8e-5,
        0.000_439_465_427_768_643_7, -0.000_328_132_519_409_837_97, -0.001_436_845_304_802_976_2,
        0.002_301_205_242_153_545_7, 0.002_967_996_691_526_094_7, -0.008_602_921_520_322_855,
        -0.003_042_989_981_354_637, 0.022_733_676_583_946_27, -0.003_270_955_535_819_293_8,
        -0.046_922_438_389_269_74, 0.022_312_336_178_103_798, 0.081_105_986_654_160_88,
        -0.057_091_419_631_676_93, -0.126_815_691_778_286_3, 0.101_135_489_177_470_27,
        0.197_310_589_565_011, -0.126_599_752_215_882_7, -0.328_320_748_363_961_75,
        0.027_314_970_403_293_636, 0.518_315_764_056_937_8, 0.610_996_615_684_622_8,
        0.370_350_724_152_641_14, 0.131_214_903_307_824_4, 0.025_985_393_703_606_044,
        0.002_241_807_001_037_312_8,
    ]),
    ("db18", &[
        -2.507_934_454_948_598_3e-9, 3.068_835_863_045_175e-8, -1.176_098_767_028_231_7e-7,
        -7.691_632_689_885_177e-8, 1.768_712_983_627_615_5e-6, -3.332_634_478_885_822e-6,
        -8.520_602_537_446_696e-6, 3.741_237_880_740_038_5e-5, -1.535_917_123_534_724_6e-7,
        -0.000_198_648_552_311_747_96, 0.000_213_581_561_910_340_7, 0.000_628_465_682_965_145_7,
        -0.001_340_596_298_336_106_6, -0.001_118_732_666_992_497_1, 0.004_943_343_605_466_738,
        0.000_118_630_033_858_117_46, -0.013_051_480_946_612_001, 0.006_262_167_954_305_707,
        0.026_670_705_926_470_59, -0.023_733_210_395_860_002, -0.044_526_141_902_982_326,
        0.057_051_247_738_536_884, 0.064_887_216_211_905_45, -0.106_752_246_659_828_49,
        -0.092_331_884_150_846_28, 0.167_081_312_763_257_4, 0.149_533_975_565_377_79,
        -0.216_480_934_005_142_98, -0.293_654_040_736_558_76, 0.147_223_111_969_928_16,
        0.571_801_654_888_651_3, 0.571_826_807_766_607_2, 0.314_678_941_337_031_7,
        0.103_588_465_822_423_59, 0.019_288_531_724_146_376, 0.001_576_310_218_440_760_5,
    ]),
    ("db19", &[
        8.666_848_838_997_619e-10, -1.116_402_067_035_825_9e-8, 4.636_937_775_782_604_5e-8,
        1.447_088_298_797_844_5e-8, -6.862_755_657_769_143e-7, 1.531_931_476_691_193e-6,
        3.010_964_316_296_526_5e-6, -1.664_017_629_715_494_5e-5, 5.105_950_487_073_886e-6,
        8.711_270_467_219_923e-5, -0.000_124_600_791_734_158_78, -0.000_260_676_135_678_628,
        0.000_735_802_520_505_435_2, 0.000_341_808_653_458_595_75, -0.002_687_551_800_701_582,
        0.000_768_954_359_257_548_4, 0.007_040_747_367_105_243, -0.005_866_922_281_012_175,
        -0.013_988_388_678_535_142, 0.019_375_549_889_176_127, 0.021_623_767_409_585_05,
        -0.045_674_226_277_230_91, -0.026_501_236_250_123_04, 0.086_906_755_555_812_23,
        0.027_584_350_625_628_667, -0.142_785_695_038_736_6, -0.033_518_541_902_302_88,
        0.212_349_743_306_278_48, 0.074_652_269_708_103_26, -0.285_838_631_755_826_24,
        -0.228_091_394_215_482_63, 0.260_894_952_651_038_85, 0.601_704_549_127_537_9,
        0.524_436_377_464_654_9, 0.264_388_431_740_896_77, 0.081_278_113_265_459_56,
        0.014_281_098_450_764_397, 0.001_108_669_763_181_710_6,
    ]),
    ("db20", &[
        -2.998_836_489_619_319_4e-10, 4.056_127_055_551_833e-9, -1.814_843_248_299_696e-8,
        2.014_322_023_550_512_6e-10, 2.633_924_226_270_001_3e-7, -6.847_079_597_000_557e-7,
        -1.011_994_010_018_886_2e-6, 7.241_248_287_673_620_5e-6, -4.376_143_862_183_997e-6,
        -3.710_586_183_394_713e-5, 6.774_280_828_377_73e-5, 0.000_101_532_889_736_702_91,
        -0.000_385_104_748_699_217_63, -5.349_759_843_997_695e-5, 0.001_392_559_619_323_136_4,
        -0.000_831_562_172_822_556_9, -0.003_581_494_259_609_622_6, 0.004_420_542_387_045_791,
        0.006_721_627_302_259_457, -0.013_810_526_137_151_92, -0.008_789_324_923_901_56,
        0.032_294_299_530_769_58, 0.005_874_681_811_811_827, -0.061_722_899_624_680_46,
        0.005_632_246_857_307_436, 0.102_291_719_174_442_56, -0.024_716_827_338_613_585,
        -0.155_458_750_707_267_95, 0.039_850_246_457_771_2, 0.228_291_050_819_916_32,
        -0.016_727_088_309_077_008, -0.326_786_800_434_034_96, -0.139_212_088_011_483_88,
        0.361_502_298_739_331_04, 0.610_493_238_938_593_9, 0.472_696_185_310_901_7,
        0.219_942_113_551_397_03, 0.063_423_780_459_081_52, 0.010_549_394_624_950_399,
        0.000_779_953_613_666_846_3,
    ]),
    ("db21", &[
        1.038_805_571_023_706_6e-10, -1.471_954_197_650_365_3e-9, 7.058_033_541_231_122e-9,
        -2.254_014_974_673_330_3e-9, -1.000_400_879_030_597_3e-7, 2.992_136_630_464_852_6e-7,
        3.166_095_442_367_030_5e-7, -3.090_017_164_545_699_3e-6, 2.790_330_539_814_487e-6,
        1.535_482_509_276_049e-5, -3.499_665_984_987_447_6e-5, -3.635_520_250_086_338e-5,
        0.000_193_664_650_416_508_05, -3.196_406_277_680_437e-5, -0.000_690_671_117_082_101_6,
        0.000_639_418_500_512_030_3, 0.001_716_607_040_630_624, -0.002_958_374_038_932_831,
        -0.002_891_334_348_588_901_4, 0.008_988_824_381_971_912, 0.002_403_470_920_805_435,
        -0.020_892_053_677_979_08, 0.003_357_756_390_338_110_7, 0.039_726_835_427_850_445,
        -0.018_653_859_202_118_515, -0.064_977_504_893_732_32, 0.045_723_405_749_228_79,
        0.096_600_390_323_724_22, -0.081_775_942_980_863_82, -0.139_940_424_932_547_2,
        0.115_233_298_439_687_1, 0.211_564_527_680_872_4, -0.112_397_071_568_450_98,
        -0.335_664_089_530_529_5, -0.035_722_919_617_255_29, 0.444_590_451_927_600_3,
        0.601_506_094_935_003_8, 0.419_687_944_939_362_8, 0.181_359_625_440_381_5,
        0.049_247_771_538_177_276, 0.007_776_639_052_354_784, 0.000_548_822_509_852_683_8,
    ]),
    ("db22", &[
        -3.602_113_484_339_555e-11, 5.335_938_821_667_49e-10, -2.729_623_146_632_976e-9,
        1.680_171_404_922_988_8e-9, 3.761_228_749_337_362_5e-8, -1.283_336_228_751_754_5e-7,
        -8.779_879_873_361_287e-8, 1.295_182_057_318_877_5e-6, -1.565_179_131_995_160_2e-6,
        -6.166_729_316_467_578e-6, 1.737_375_695_756_189_3e-5, 1.137_434_966_212_593_2e-5,
        -9.405_223_634_815_76e-5, 4.345_899_904_532_003e-5, 0.000_328_609_414_213_678_7,
        -0.000_423_787_399_839_180_06, -0.000_770_690_988_123_119_7, 0.001_827_010_495_657_279_1,
        0.001_044_260_739_186_025_3, -0.005_455_691_986_156_717, 0.000_300_137_398_507_643_6,
        0.012_564_725_218_343_373, -0.006_213_782_849_364_659, -0.023_480_001_344_493_188,
        0.020_586_707_627_565_36, 0.036_970_846_620_698_02, -0.046_530_811_827_506_714,
        -0.051_364_254_297_444_13, 0.084_557_376_366_826_07, 0.068_076_314_392_732_22,
        -0.131_768_137_686_683_4, -0.097_110_798_409_114_71, 0.179_973_187_992_891_3,
        0.164_093_188_106_766_49, -0.200_568_406_104_887_1, -0.312_726_580_428_296_2,
        0.073_724_501_183_630_15, 0.507_901_090_622_163_9, 0.578_432_731_009_524_4,
        0.367_728_683_446_037_5, 0.148_367_540_890_111_42, 0.038_069_937_236_411_08,
        0.005_721_854_631_334_539_5, 0.000_386_263_231_491_098_23,
    ]),
    ("db23", &[
        1.250_203_302_351_041e-11, -1.932_405_111_313_417_4e-10, 1.050_446_453_696_543_3e-9,
        -9.472_885_901_812_052e-10, -1.399_935_495_437_998_9e-8, 5.417_549_179_539_278_4e-8,
        1.853_091_785_633_965e-8, -5.339_005_405_209_421e-7, 8.147_574_834_779_447e-7,
        2.397_569_546_840_24e-6, -8.347_875_567_854_625e-6, -2.635_207_889_249_186_4e-6,
        4.426_071_203_109_246e-5, -3.378_894_834_120_904e-5, -0.000_150_021_850_349_034_1,
        0.000_256_762_452_007_873_74, 0.000_319_420_492_709_901_15, -0.001_061_231_228_886_651_3,
        -0.000_246_501_400_516_351_2, 0.003_122_876_449_818_145, -0.001_134_865_473_356_251_6,
        -0.007_075_319_273_706_152, 0.006_031_840_650_024_163, 0.012_751_943_931_528_287,
        -0.017_537_101_003_035_845, -0.018_523_513_650_156_16, 0.038_495_332_522_569_196,
        0.021_765_856_834_499_976, -0.070_207_391_574_901_1, -0.021_126_212_356_227_24,
        0.112_297_043_618_107_29, 0.020_283_074_575_649_3, -0.164_011_321_531_875_92,
        -0.033_037_447_094_289_38, 0.223_573_658_242_040_23, 0.092_125_407_082_418_05,
        -0.271_402_098_607_843_03, -0.261_392_148_030_644_1, 0.181_392_625_363_840_02,
        0.551_018_517_241_919_4, 0.544_931_147_873_520_5, 0.318_450_813_852_865_2,
        0.120_515_531_783_971_94, 0.029_310_003_657_884_116, 0.004_202_748_893_183_833,
        0.000_271_904_194_128_288_86,
    ]),
    ("db24", &[
        -4.342_782_503_803_71e-12, 6.991_801_157_638_23e-11, -4.024_658_644_584_379_7e-10,
        4.748_375_824_256_231e-10, 5.157_776_789_672e-9, -2.255_740_388_176_086_2e-8,
        -5.057_645_419_792_5e-10, 2.166_339_653_278_574_5e-7, -4.032_507_756_879_972e-7,
        -8.980_253_143_938_407e-7, 3.901_100_338_597_703e-6, 1.341_157_750_809_114_7e-8,
        -2.022_888_292_612_697_6e-5, 2.183_241_460_466_558_2e-5, 6.559_388_639_305_635e-5,
        -0.000_146_007_981_776_261_7, -0.000_118_123_323_796_955_47, 0.000_586_127_059_318_311,
        -4.416_184_856_141_52e-5, -0.001_696_456_818_974_824_4, 0.001_153_764_936_839_481_5,
        0.003_736_046_178_282_523_5, -0.004_746_568_786_323_114, -0.006_291_435_370_018_188,
        0.013_049_970_871_085_736, 0.007_661_721_881_646_586, -0.028_213_107_094_901_89,
        -0.004_944_709_428_125_628, 0.051_301_620_039_980_88, -0.004_578_436_241_819_222,
        -0.082_161_654_208_001_67, 0.020_980_113_709_144_814, 0.121_016_303_469_224_23,
        -0.038_777_173_577_920_016, -0.171_175_351_370_346_9, 0.042_528_729_641_483_83,
        0.239_237_388_780_310_87, 0.004_776_613_684_344_728, -0.317_943_078_999_362_75,
        -0.187_271_406_885_156_23, 0.280_985_553_233_711_9, 0.574_939_221_095_542,
        0.504_371_040_839_925, 0.272_908_916_067_726_3, 0.097_262_235_833_625_2,
        0.022_482_339_949_716_41, 0.003_082_081_714_905_494_6, 0.000_191_435_800_947_551_36,
    ]),
    ("db25", &[
        1.509_692_082_823_910_8e-12, -2.527_625_163_465_644_7e-11, 1.535_901_570_162_657_2e-10,
        -2.228_474_910_228_169e-10, -1.880_415_755_062_155_4e-9, 9.279_224_480_081_372e-9,
        -2.611_598_556_111_770_7e-9, -8.656_941_732_278_507e-8, 1.922_806_790_142_371_7e-7,
        3.212_037_518_862_519e-7, -1.779_201_332_653_634_6e-6, 5.232_827_708_153_076e-7,
        8.990_661_393_062_588e-6, -1.277_195_293_199_783_7e-5, -2.733_048_119_960_041_7e-5,
        7.904_640_003_965_528e-5, 3.543_714_523_276_059e-5, -0.000_309_880_099_098_469_8,
        0.000_115_321_244_046_630_05, 0.000_877_258_193_674_827_5, -0.000_899_977_423_746_295,
        -0.001_842_484_290_203_331_3, 0.003_322_707_773_973_192, 0.002_726_936_258_738_495_6,
        -0.008_860_702_618_046_369, -0.001_989_425_782_202_736_6, 0.018_922_804_476_627_628,
        -0.003_079_836_794_847_036_6, -0.034_042_320_460_653_34, 0.015_542_605_929_102_291,
        0.053_617_909_398_779_5, -0.037_173_962_861_122_51, -0.077_084_111_056_574_2,
        0.066_752_164_494_018_6, 0.106_633_805_018_477_95, -0.098_508_615_289_960_22,
        -0.150_560_213_750_579_62, 0.118_155_286_719_959_85, 0.224_537_819_745_101_7,
        -0.087_587_614_587_654_66, -0.336_473_079_641_746_1, -0.097_174_640_964_638_14,
        0.367_885_074_802_946_7, 0.581_636_896_746_057_8, 0.459_683_415_146_094_6,
        0.231_693_507_886_021_83, 0.078_035_862_872_132_67, 0.017_186_741_254_040_155,
        0.002_256_959_591_854_779_4, 0.000_134_802_979_347_018_9,
    ]),
    ("db26", &[
        -5.251_871_224_244_435e-13, 9.130_510_016_371_797e-12, -5.840_408_185_341_171e-11,
        1.002_303_191_046_526_9e-10, 6.780_047_245_828_637e-10, -3.776_010_478_532_324e-9,
        2.169_328_259_850_323e-9, 3.407_795_621_290_73e-8, -8.904_466_370_168_59e-8,
        -1.079_004_237_578_671_4e-7, 7.939_210_633_709_952e-7, -4.650_463_220_640_262_7e-7,
        -3.887_400_161_856_795e-6, 7.000_078_682_964_987e-6, 1.074_221_540_872_195e-5,
        -4.109_673_996_391_477_5e-5, -5.277_795_493_037_869e-6, 0.000_157_479_523_860_749_35,
        -0.000_106_057_474_828_380_4, -0.000_431_955_707_426_180_77, 0.000_616_138_220_457_434_4,
        0.000_838_348_805_654_361_6, -0.002_145_530_281_567_621, -0.000_939_058_250_473_829,
        0.005_601_947_239_423_805, -0.000_528_738_399_262_681_5, -0.011_785_497_906_193_03,
        0.005_829_580_555_318_888, 0.020_734_920_179_963_826, -0.017_760_903_568_358_185,
        -0.031_378_110_363_067_76, 0.038_535_715_971_111_86, 0.042_232_185_796_372_036,
        -0.068_654_759_604_035_91, -0.053_448_561_681_483_195, 0.106_482_405_249_808_63,
        0.069_823_186_113_292_37, -0.147_977_193_275_254_5, -0.104_323_900_285_927_04,
        0.182_755_409_589_672_37, 0.181_291_832_311_122_7, -0.174_839_961_289_392_5,
        -0.326_384_593_691_78, 0.001_774_076_780_986_685_8, 0.439_158_311_789_166_26,
        0.573_669_043_034_222_3, 0.413_292_962_278_356_4, 0.195_039_438_716_770_1,
        0.062_274_744_025_149_605, 0.013_097_554_292_558_5, 0.001_650_520_233_532_988_2,
        9.493_795_750_710_593e-5,
    ]),
    ("db27", &[
        1.828_188_352_882_425e-13, -3.295_790_122_476_586e-12, 2.213_662_088_067_662_6e-11,
        -4.374_986_224_293_654_4e-11, -2.415_526_928_011_131e-10, 1.521_614_984_778_521_8e-9,
        -1.309_465_606_856_955_1e-9, -1.321_332_273_990_056_5e-8, 4.026_255_052_866_908_6e-8,
        3.286_558_968_055_159_5e-8, -3.472_468_147_394_389_3e-7, 3.050_880_686_251_999e-7,
        1.634_369_624_725_637_8e-6, -3.657_500_908_187_105e-6, -3.901_164_070_638_425e-6,
        2.063_442_647_736_885_4e-5, -3.517_483_614_907_445_3e-6, -7.711_145_517_797_584e-5,
        7.660_058_387_068_577e-5, 0.000_201_971_987_969_032_68, -0.000_387_901_857_410_132_76,
        -0.000_341_835_122_691_542_77, 0.001_301_177_450_244_135, 0.000_145_752_962_593_172_86,
        -0.003_332_854_469_520_006_3, 0.001_342_626_877_303_679_5, 0.006_856_635_609_684_880_5,
        -0.005_862_096_345_462_926, -0.011_577_186_458_976_282, 0.015_665_595_648_924_578,
        0.016_146_966_922_395_666, -0.032_739_066_631_020_87, -0.018_512_493_561_998_078,
        0.057_969_405_734_717_99, 0.017_311_018_265_493_71, -0.091_022_906_529_565_92,
        -0.014_062_751_555_808_765, 0.131_197_971_717_155_33, 0.015_799_397_460_240_484,
        -0.178_031_740_959_008_6, -0.038_786_418_631_802_31, 0.227_273_288_414_170_83,
        0.114_823_019_517_785_35, -0.248_264_581_903_260_56, -0.289_716_803_314_594_9,
        0.102_840_855_061_822_92, 0.493_406_122_677_999, 0.553_849_860_990_480_1,
        0.367_110_214_125_389_8, 0.162_922_027_502_393_32, 0.049_452_599_982_904_88,
        0.009_952_588_780_876_62, 0.001_205_531_231_673_213_3, 6.687_131_385_431_931e-5,
    ]),
    ("db28", &[
        -6.367_772_354_714_857e-14, 1.188_850_533_405_901_5e-12, -8.365_490_471_258_8e-12,
        1.867_367_263_783_390_6e-11, 8.492_220_011_056_382e-11, -6.077_041_247_229_011e-10,
        6.944_540_328_946_227e-10, 5.044_047_056_383_437e-9, -1.784_138_690_875_71e-8,
        -8.262_387_315_626_558e-9, 1.490_660_013_535_362_2e-7, -1.757_461_173_209_842_7e-7,
        -6.670_215_479_954_893e-7, 1.840_363_734_517_769_2e-6, 1.247_900_317_574_834_2e-6,
        -1.004_326_041_333_422_6e-5, 4.638_664_981_394_295e-6, 3.641_401_211_050_802_5e-5,
        -4.907_713_416_190_250_5e-5, -8.903_901_490_044_488e-5, 0.000_229_579_098_223_345_63,
        0.000_115_465_606_365_892_13, -0.000_748_674_955_911_463, 0.000_141_567_239_314_046_44,
        0.001_875_998_668_202_795_6, -0.001_360_373_845_639_692_4, -0.003_725_461_247_074_255,
        0.004_784_863_112_454_241_5, 0.005_838_816_627_748_945, -0.012_063_591_968_218_49,
        -0.006_815_549_764_552_309, 0.024_688_060_010_151_867, 0.004_431_732_910_062_988,
        -0.043_333_368_616_086_28, 0.003_448_018_955_540_951_2, 0.067_747_895_501_909_34,
        -0.017_341_922_831_305_9, -0.097_685_355_805_652_44, 0.034_478_631_275_099_7,
        0.134_627_567_910_226_1, -0.046_838_233_744_551_68, -0.182_877_330_732_984_93,
        0.036_906_885_315_711_27, 0.245_808_151_373_759_55, 0.032_857_879_163_387_1,
        -0.301_327_809_532_641_77, -0.230_498_954_047_582_53, 0.200_176_144_045_984_44,
        0.530_516_293_441_485_8, 0.524_998_231_630_335_5, 0.322_563_361_285_522_43,
        0.135_137_914_253_641_05, 0.039_092_608_115_405_346, 0.007_542_650_377_646_859,
        0.000_879_498_515_984_387, 4.710_807_775_014_051e-5,
    ]),
    ("db29", &[
        2.219_191_311_588_303e-14, -4.285_654_870_068_344_3e-13, 3.152_762_413_370_310_5e-12,
        -7.832_509_733_627_818e-12, -2.940_589_250_764_533e-11, 2.407_099_453_509_342_7e-10,
        -3.426_800_863_263_089e-10, -1.893_995_386_171_984e-9, 7.768_978_854_770_062e-9,
        1.076_591_906_619_196_1e-9, -6.286_156_922_010_786e-8, 9.387_197_411_095_864e-8,
        2.633_898_386_997_697e-7, -8.975_701_750_636_281e-7, -3.029_054_592_052_818e-7,
        4.750_609_246_452_552_5e-6, -3.593_644_804_025_187_5e-6, -1.657_328_395_306_616_4e-5,
        2.913_344_750_169_041e-5, 3.645_026_068_562_775e-5, -0.000_129_304_484_008_072_07,
        -2.292_018_041_214_5e-5, 0.000_411_128_345_474_276_7, -0.000_200_071_136_307_677_97,
        -0.001_000_778_327_085_680_5, 0.001_087_053_942_226_063, 0.001_877_120_925_723_650_2,
        -0.003_473_798_989_681_100_7, -0.002_550_807_127_789_472_6, 0.008_469_725_493_560_752,
        0.001_737_880_332_720_511, -0.017_041_224_573_606_69, 0.002_648_327_307_678_168,
        0.029_470_431_871_747_64, -0.012_917_142_554_266_795, -0.045_187_981_277_788_34,
        0.030_531_543_272_704_135, 0.063_479_164_584_211_86, -0.055_027_489_525_325_726,
        -0.085_125_492_615_635_5, 0.083_220_747_162_449_76, 0.114_472_295_893_818_26,
        -0.107_845_949_938_721_42, -0.160_877_988_594_187_73, 0.112_419_174_873_188_38,
        0.236_105_236_153_025_95, -0.055_706_800_072_940_856, -0.330_040_948_917_588_06,
        -0.154_028_734_459_900_06, 0.289_105_238_335_829_2, 0.551_374_432_758_375_2,
        0.489_758_804_762_199_3, 0.280_653_455_970_982_96, 0.111_370_116_951_740_52,
        0.030_773_580_221_408_376, 0.005_702_126_517_773_375_5, 0.000_640_951_680_304_443_5,
        3.318_966_279_841_525e-5,
    ]),
    ("db30", &[
        -7.737_942_630_954_405e-15, 1.543_997_570_847_62e-13, -1.185_237_592_101_582_2e-12,
        3.239_428_638_532_286e-12, 1.000_105_131_393_171_2e-11, -9.461_387_997_276_803e-11,
        1.613_622_978_270_904_2e-10, 6.984_862_691_832_183e-10, -3.331_105_680_467_578e-9,
        5.553_397_861_397_054e-10, 2.605_442_754_977_625_4e-8, -4.764_379_965_139_453_3e-8,
        -1.000_414_682_354_500_9e-7, 4.261_662_326_011_572_3e-7, 1.099_474_338_526_203_3e-8,
        -2.187_267_676_996_166_5e-6, 2.327_549_098_493_686_6e-6, 7.252_145_535_890_469e-6,
        -1.636_152_478_725_426_6e-5, -1.339_716_863_293_971_7e-5, 6.982_008_370_808_328e-5,
        -8.548_305_467_584_07e-6, -0.000_216_171_830_116_963_37, 0.000_172_482_584_235_170_96,
        0.000_505_094_823_903_346_8, -0.000_767_878_250_438_091_9, -0.000_860_927_696_811_042_4,
        0.002_324_520_094_060_099, 0.000_843_384_586_662_093_4, -0.005_530_730_148_192_003,
        0.000_619_671_756_497_724_4, 0.010_915_631_658_304_89, -0.005_296_859_666_131_087,
        -0.018_399_743_868_117_34, 0.015_287_960_769_857_396, 0.027_078_619_595_294_184,
        -0.032_263_758_919_352_21, -0.035_673_397_496_759_61, 0.056_712_365_744_735_7,
        0.043_801_664_671_417_73, -0.087_658_690_036_383_66, -0.053_806_465_458_257_076,
        0.122_747_746_045_009_38, 0.072_778_658_970_364_42, -0.157_236_817_959_993_8,
        -0.114_558_219_432_707_78, 0.177_829_873_244_836_73, 0.199_462_121_580_664_31,
        -0.141_968_513_330_082_92, -0.332_966_975_020_855_6, -0.066_183_670_775_937_31,
        0.366_242_683_371_627_96, 0.557_572_232_912_836_4, 0.450_487_821_853_317_8,
        0.242_020_670_940_214_1, 0.091_238_304_067_015_7, 0.024_130_832_671_588_38,
        0.004_300_797_165_048_069, 0.000_466_637_950_428_550_9, 2.338_616_172_731_421_5e-5,
    ]),
    ("db31", &[
        2.699_382_879_762_665_6e-15, -5.559_442_050_579_014_6e-14, 4.445_467_096_291_932_3e-13,
        -1.324_334_917_243_963e-12, -3.327_008_967_125_98e-12, 3.692_108_808_871_129_6e-11,
        -7.348_930_032_486_264e-11, -2.524_043_954_153_353e-10, 1.408_568_151_025_177_5e-9,
        -6.474_311_687_959_861e-10, -1.061_529_602_150_252_3e-8, 2.328_309_713_821_409_7e-8,
        3.616_826_517_331_004_7e-8, -1.975_925_129_170_206_2e-7, 5.327_250_656_974_915e-8,
        9.810_015_422_044_372e-7, -1.369_060_230_942_940_7e-6, -3.035_142_365_891_509_6e-6,
        8.795_301_342_692_988e-6, 4.034_520_235_184_279e-6, -3.631_255_157_860_086e-5,
        1.501_335_727_444_533e-5, 0.000_108_958_435_041_676_68, -0.000_124_341_161_725_022_87,
        -0.000_239_658_346_940_294_95, 0.000_499_881_617_563_722_3, 0.000_343_139_829_690_473_45,
        -0.001_459_041_741_985_161, -6.397_901_106_014_601e-5, 0.003_393_066_776_715_931_7,
        -0.001_428_264_223_218_91, -0.006_520_852_375_874_612, 0.005_516_163_573_310_993,
        0.010_517_639_487_371_841, -0.013_900_552_939_266_53, -0.014_276_275_277_763_52,
        0.028_047_619_366_756_17, 0.016_154_171_565_985_913, -0.048_619_075_464_854_33,
        -0.014_880_026_618_104_822, 0.075_353_611_743_281_41, 0.010_941_297_452_364_97,
        -0.107_612_773_323_495_63, -0.008_139_832_273_469_236, 0.145_089_500_931_993_2,
        0.015_436_988_429_488_934, -0.186_962_360_895_715_44, -0.049_926_349_160_468_24,
        0.224_966_711_473_737_1, 0.140_178_288_765_273_27, -0.217_978_485_523_563_36,
        -0.310_955_118_319_507_5, 0.027_169_212_497_369_463, 0.429_468_808_206_137_3,
        0.551_139_840_914_275_5, 0.409_192_200_037_427_84, 0.207_012_874_485_235_34,
        0.074_336_093_011_647_88, 0.018_853_691_612_985_914, 0.003_236_884_068_627_721_3,
        0.000_339_412_203_776_995_7, 1.648_013_386_456_141e-5,
    ]),
    ("db32", &[
        -9.421_019_139_535_079e-16, 2.000_715_303_810_525e-14, -1.663_800_489_433_402_3e-13,
        5.361_482_229_611_802e-13, 1.075_610_653_501_062_2e-12, -1.430_918_765_169_202_4e-11,
        3.263_270_741_332_908e-11, 8.904_723_796_221_606e-11, -5.881_091_462_634_606e-10,
        4.384_387_799_940_474_3e-10, 4.250_422_311_980_593e-9, -1.104_383_021_722_649e-8,
        -1.219_924_359_483_373_1e-8, 8.965_966_311_957_729e-8, -5.003_361_868_748_23e-8,
        -4.285_970_693_151_457e-7, 7.560_047_625_595_948e-7, 1.202_889_036_321_621e-6,
        -4.558_309_576_264_423e-6, -6.361_781_532_260_255e-7, 1.824_268_401_980_691_4e-5,
        -1.294_045_779_405_512_7e-5, -5.259_809_282_684_323e-5, 8.103_678_329_134_838e-5,
        0.000_105_391_546_173_982_81, -0.000_305_965_442_382_691_2, -0.000_102_453_731_060_739_62,
        0.000_867_305_851_845_055_5, -0.000_221_167_872_957_909_8, -0.001_964_740_555_821_778_3,
        0.001_468_955_100_468_467_8, 0.003_627_224_640_687_865, -0.004_649_216_751_184_412,
        -0.005_411_568_257_275_791, 0.011_017_400_715_406_881, 0.006_167_527_310_685_675,
        -0.021_662_822_836_391_194, -0.004_145_907_660_827_218, 0.037_051_457_923_544_68,
        -0.002_380_264_464_932_573_8, -0.056_926_314_062_478_44, 0.014_106_151_516_106_608,
        0.080_874_140_638_483_96, -0.029_627_872_508_447_704, -0.109_456_113_116_089_38,
        0.044_404_908_199_939_74, 0.145_232_079_475_286_66, -0.048_995_117_184_671_74,
        -0.192_102_344_708_546_9, 0.024_662_444_839_697_404, 0.248_310_642_356_880_16,
        0.064_713_354_805_516_24, -0.277_421_581_558_427_2, -0.266_698_181_476_675_57,
        0.120_630_538_265_617_83, 0.477_809_163_733_948_4, 0.534_317_919_340_953_9,
        0.367_509_628_597_349_65, 0.175_750_783_639_438_9, 0.060_257_499_120_335_37,
        0.014_681_046_381_419_136, 0.002_431_261_919_572_266, 0.000_246_656_690_638_090_33,
        1.161_463_302_135_014_9e-5,
    ]),
    ("db33", &[
        3.289_373_678_416_306e-16, -7.196_510_545_363_322e-15, 6.214_740_247_174_398e-14,
        -2.152_488_386_833_302_6e-13, -3.343_481_218_953_279e-13, 5.509_414_720_765_525e-12,
        -1.420_236_859_889_936_7e-11, -3.049_574_453_945_863_5e-11, 2.426_833_102_305_682e-10,
        -2.496_402_105_246_194e-10, -1.671_392_677_251_932_4e-9, 5.111_211_857_347_454e-9,
        3.672_863_576_838_181_4e-9, -3.987_838_198_518_880_6e-8, 3.377_972_703_730_854e-8,
        1.822_443_332_571_053_5e-7, -3.985_791_291_985_944e-7, -4.426_923_407_952_870_4e-7,
        2.288_371_276_141_527_3e-6, -3.607_516_102_879_772e-7, -8.866_121_366_757_737e-6,
        9.070_805_757_828_453e-6, 2.423_335_398_816_890_3e-5, -4.929_564_423_417_301_5e-5,
        -4.160_438_516_273_709_6e-5, 0.000_178_043_189_825_124_55, 4.393_166_251_766_185_6e-6,
        -0.000_490_832_900_759_035_1, 0.000_272_730_584_733_693_7, 0.001_074_380_696_351_291_3,
        -0.001_204_309_257_604_659, -0.001_860_718_214_455_796, 0.003_480_800_953_405_712,
        0.002_389_062_408_165_908_6, -0.007_953_540_387_057_94, -0.001_594_288_782_414_604_8,
        0.015_316_954_115_857_666, -0.002_167_758_617_353_607, -0.025_728_761_754_732_973,
        0.010_703_265_820_019_549, 0.038_687_060_760_244_966, -0.025_248_582_977_476_498,
        -0.053_471_251_335_822_29, 0.045_734_561_893_896_68, 0.070_191_143_940_996_53,
        -0.070_302_485_054_056_16, -0.091_146_968_351_331_49, 0.094_788_088_050_615_96,
        0.121_967_856_403_734_61, -0.110_844_133_116_710_79, -0.171_428_099_051_859_32,
        0.099_851_558_680_338_15, 0.245_420_612_119_279_12, -0.019_278_339_436_952_76,
        -0.315_997_410_766_560_24, -0.204_202_622_398_542_12, 0.209_582_350_713_055_42,
        0.511_254_770_583_267_5, 0.509_376_172_514_939_6, 0.326_718_130_117_707_56,
        0.148_186_313_180_052_82, 0.048_614_666_531_716_19, 0.011_395_943_374_581_61,
        0.001_822_709_435_164_084_3, 0.000_179_101_615_370_279_15, 8.186_358_314_175_091e-6,
    ]),
    ("db34", &[
        -1.148_944_754_480_59e-16, 2.587_338_381_935_699_6e-15, -2.317_083_703_906_408_4e-14,
        8.579_194_051_799_733e-14, 9.799_451_158_211_598e-14, -2.107_879_108_915_301_7e-12,
        6.080_125_354_000_167_5e-12, 1.004_208_735_461_769_8e-11, -9.904_774_537_632_41e-11,
        1.300_410_318_609_415_3e-10, 6.446_378_210_323_402e-10, -2.316_501_946_995_483e-9,
        -8.665_744_261_368_722e-10, 1.740_423_332_936_068e-8, -1.990_346_501_531_737e-8,
        -7.526_701_740_412_59e-8, 2.025_990_666_667_859_3e-7, 1.448_195_708_333_185e-7,
        -1.116_306_534_817_008_4e-6, 4.979_718_101_421_308e-7, 4.169_871_758_547_028e-6,
        -5.710_826_510_998_304e-6, -1.057_657_494_257_950_6e-5, 2.844_951_419_697_807_5e-5,
        1.353_117_227_249_649_6e-5, -9.914_697_770_780_135e-5, 2.660_050_018_453_442e-5,
        0.000_265_077_239_755_805_77, -0.000_232_673_214_023_353_16, -0.000_552_735_576_214_419_8,
        0.000_875_199_906_407_868_9, 0.000_858_995_987_436_366_2, -0.002_399_453_943_537_056,
        -0.000_769_212_797_506_783_7, 0.005_334_950_768_759_936, -0.000_619_474_884_515_387_3,
        -0.010_045_506_708_361_52, 0.004_713_649_260_999_81, 0.016_409_374_199_865_19,
        -0.013_143_980_016_657_161, -0.023_671_737_922_826_366, 0.027_228_350_756_354_196,
        0.030_739_746_573_959_344, -0.047_438_559_645_277_76, -0.037_012_838_417_862_45,
        0.073_185_235_436_795_6, 0.043_576_094_649_631_296, -0.102_947_596_992_814_08,
        -0.054_482_968_064_139_05, 0.134_125_960_271_136_13, 0.077_991_846_937_948_11,
        -0.160_924_927_177_866_8, -0.127_337_358_223_801_16, 0.166_601_750_412_207_46,
        0.216_907_220_187_427_59, -0.103_891_915_515_640_48, -0.331_525_301_508_386_94,
        -0.128_246_842_174_437_16, 0.290_366_329_507_275, 0.530_555_099_656_463_2,
        0.478_478_746_279_371_04, 0.287_765_059_233_714_54, 0.124_152_482_111_376_8,
        0.039_048_841_351_785_94, 0.008_819_889_403_884_978, 0.001_364_061_390_059_05,
        0.000_129_947_620_067_953, 5.770_510_632_730_285e-6,
    ]),
    ("db35", &[
        4.014_628_712_333_488_6e-17, -9.298_012_529_324_185e-16, 8.624_037_434_720_089e-15,
        -3.397_720_856_796_267_5e-14, -2.597_954_328_893_848_2e-14, 8.015_088_533_687_901e-13,
        -2.567_065_476_155_081_5e-12, -3.125_639_357_108_557_6e-12, 4.000_536_627_253_744_5e-11,
        -6.407_938_256_501_889e-11, -2.433_545_573_751_673e-10, 1.030_823_345_485_433_3e-9,
        5.897_951_310_384_362e-11, -7.458_116_552_893_037e-9, 1.084_902_733_789_934_8e-8,
        3.008_188_650_719_067e-8, -9.990_396_944_534_901e-8, -3.700_308_378_205_125e-8,
        5.302_368_616_904_761e-7, -3.903_931_733_287_306_4e-7, -1.895_929_617_693_153_2e-6,
        3.353_345_862_871_31e-6, 4.308_047_861_716_731e-6, -1.572_442_077_270_281_7e-5,
        -2.437_001_526_827_79e-6, 5.304_143_122_913_31e-5, -2.976_995_962_848_509_7e-5,
        -0.000_136_588_307_226_116_17, 0.000_170_001_228_366_124_9, 0.000_264_832_881_996_128_9,
        -0.000_586_481_031_899_181_8, -0.000_334_669_216_425_085_5, 0.001_549_637_469_702_363,
        7.615_969_435_172_737e-6, -0.003_357_644_380_922_383_4, 0.001_428_088_794_070_762_2,
        0.006_137_754_586_740_521, -0.005_085_991_649_233_43, -0.009_577_797_899_235_71,
        0.012_289_436_008_118_711, 0.012_766_456_715_656_745, -0.024_169_497_801_660_268,
        -0.014_366_839_784_220_072, 0.041_254_693_064_705_09, 0.013_228_549_585_036_555,
        -0.063_356_037_440_443_46, -0.009_318_558_949_903_924, 0.089_913_547_570_729_54,
        0.004_734_229_172_641_949, -0.120_585_522_643_393_56, -0.004_752_680_834_111_351,
        0.155_292_480_396_237_1, 0.019_309_544_666_018_35, -0.191_919_589_298_593_96,
        -0.065_262_871_310_677_54, 0.217_299_289_321_089_3, 0.166_041_357_490_780_92,
        -0.181_786_976_766_727_84, -0.323_822_864_912_116_15, -0.043_883_881_873_934_04,
        0.360_345_640_518_047_35, 0.537_008_427_509_166_1, 0.443_592_739_224_035_4,
        0.251_307_378_994_493_3, 0.103_404_455_861_478_38, 0.031_236_288_511_490_715,
        0.006_807_292_884_319_132, 0.001_019_122_680_375_098_2, 9.421_469_475_576_74e-5,
        4.067_934_061_148_559e-6,
    ]),
    ("db36", &[
        -1.403_274_175_373_190_7e-17, 3.339_971_984_818_693e-16, -3.204_628_543_401_749_7e-15,
        1.338_071_386_299_105_9e-14, 5.542_263_182_639_804e-15, -3.029_285_026_974_877e-13,
        1.070_969_357_114_017e-12, 8.876_846_287_217_375e-13, -1.599_716_689_261_357e-11,
        3.037_429_098_112_535e-11, 8.962_418_203_859_612e-11, -4.512_545_778_563_249_4e-10,
        1.090_815_553_713_751_8e-10, 3.138_841_695_782_424e-9, -5.612_784_343_327_791e-9,
        -1.156_093_688_817_008_5e-8, 4.799_043_465_450_992e-8, 2.753_249_073_339_512e-9,
        -2.455_377_658_434_232_7e-7, 2.548_423_522_556_577_6e-7, 8.311_421_279_707_779e-7,
        -1.870_811_602_859_180_8e-6, -1.586_145_782_434_577_5e-6, 8.372_218_198_160_788e-6,
        -1.183_471_059_985_616e-6, -2.731_390_824_654_337_8e-5, 2.375_106_683_660_860_8e-5,
        6.694_741_196_930_59e-5, -0.000_113_189_946_808_466_57, -0.000_115_511_889_584_352_71,
        0.000_369_350_728_496_751_05, 8.614_565_758_992_702e-5, -0.000_946_340_382_326_110_2,
        0.000_277_681_279_571_202_6, 0.001_990_793_771_851_737_3, -0.001_503_074_066_296_643_8,
        -0.003_484_541_445_404_883_4, 0.004_413_484_835_350_576, 0.005_022_989_106_665_829,
        -0.009_990_263_473_281_372, -0.005_657_813_245_058_818, 0.019_063_594_780_625_36,
        0.003_984_040_198_717_005, -0.031_980_720_677_639_7, 0.001_424_972_661_765_391_7,
        0.048_513_083_547_809_09, -0.011_319_100_316_817_429, -0.068_209_016_636_817_51,
        0.025_038_721_449_568_49, 0.091_156_782_258_016_54, -0.039_880_853_575_513_17,
        -0.118_803_754_310_135_64, 0.050_276_180_073_538_43, 0.154_106_236_627_642_9,
        -0.045_861_400_746_392_715, -0.199_337_205_608_649_62, 0.007_278_515_095_792_229,
        0.246_537_277_608_974_2, 0.098_114_204_163_114_77, -0.246_807_036_978_125_53,
        -0.294_421_039_589_114_6, 0.043_975_197_529_348_63, 0.417_875_335_600_969_8,
        0.532_266_895_260_728_7, 0.406_433_697_708_255_3, 0.217_756_953_097_900_8,
        0.085_652_092_595_264_09, 0.024_890_565_644_827_965, 0.005_240_297_377_409_884,
        0.000_760_215_109_966_848_8, 6.826_028_678_546_358e-5, 2.867_925_182_755_946e-6,
    ]),
    ("db37", &[
        4.906_615_064_935_203_4e-18, -1.199_280_335_852_879_6e-16, 1.189_012_387_508_252_8e-15,
        -5.243_025_691_884_206e-15, -4.518_889_607_463_727e-16, 1.138_052_830_921_439_7e-13,
        -4.421_612_409_872_105_6e-13, -2.096_363_194_234_800_6e-13, 6.334_955_440_973_913_5e-12,
        -1.398_415_715_537_641_4e-11, -3.203_398_244_123_242e-11, 1.946_164_894_082_315e-10,
        -1.031_411_129_096_975e-10, -1.297_205_001_469_435e-9, 2.793_974_465_953_983e-9,
        4.224_485_706_362_419e-9, -2.252_193_836_724_805_7e-8, 5.350_657_515_461_434_4e-9,
        1.109_031_232_216_439_4e-7, -1.509_885_388_671_583_7e-7, -3.494_948_603_445_728e-7,
        1.002_121_399_297_177_6e-6, 4.854_731_396_996_412e-7, -4.309_941_556_597_092_6e-6,
        1.849_945_003_115_590_3e-6, 1.354_327_718_416_781_7e-5, -1.639_162_496_160_583_2e-5,
        -3.098_662_927_619_93e-5, 7.055_138_782_065_466e-5, 4.336_726_125_945_695e-5,
        -0.000_220_894_403_245_549_38, 1.534_439_023_195_503_4e-5, 0.000_549_053_277_337_363_1,
        -0.000_328_078_847_088_019_83, -0.001_111_484_865_318_630_2, 0.001_263_934_258_117_477_2,
        0.001_816_871_343_801_423_6, -0.003_394_523_276_408_398_8, -0.002_248_053_187_003_824_6,
        0.007_387_757_452_855_584, 0.001_519_305_778_833_399_1, -0.013_763_981_962_894_785,
        0.001_690_472_383_484_423_8, 0.022_618_651_544_599_473, -0.008_833_493_890_410_233,
        -0.033_523_584_064_100_97, 0.020_972_800_592_597_547, 0.045_807_944_151_268_334,
        -0.038_253_829_479_384_25, -0.059_256_815_632_658_97, 0.059_567_410_871_529_954,
        0.075_047_619_948_360_18, -0.082_330_211_906_557_41, -0.096_607_540_616_684_39,
        0.101_780_296_838_814_18, 0.129_929_646_959_853_76, -0.108_451_713_823_301_78,
        -0.181_962_291_778_608, 0.081_806_028_387_218_62, 0.251_523_254_360_268_7,
        0.019_671_500_452_359_39, -0.294_375_915_262_661_77, -0.246_180_429_761_083_42,
        0.130_878_963_233_020_17, 0.462_207_553_661_605_7, 0.518_167_040_855_622_9,
        0.368_440_972_400_306_15, 0.187_326_331_862_064_93, 0.070_584_825_977_181_6,
        0.019_762_286_153_879_59, 0.004_024_140_368_257_286_5, 0.000_566_241_837_706_672_4,
        4.942_343_750_628_132e-5, 2.022_060_862_498_392_3e-6,
    ]),
    ("db38", &[
        -1.716_152_451_088_744_2e-18, 4.304_596_839_558_790_3e-17, -4.405_307_042_483_461e-16,
        2.045_099_676_788_988_7e-15, -4.563_397_162_127_374e-16, -4.249_817_819_571_463e-14,
        1.808_661_236_274_530_6e-13, 2.626_496_504_065_252e-14, -2.484_789_237_563_642_7e-12,
        6.291_537_317_039_508e-12, 1.101_692_934_599_454_5e-11, -8.278_256_522_538_134e-11,
        6.732_336_490_189_309e-11, 5.261_132_557_357_599e-10, -1.349_197_753_983_448_9e-9,
        -1.436_329_487_795_135_8e-9, 1.034_704_539_274_858_5e-8, -5.424_274_800_287_298e-9,
        -4.884_757_937_459_286_6e-8, 8.400_351_046_895_966e-8, 1.396_377_545_508_355_3e-7,
        -5.187_733_738_874_145e-7, -8.487_087_586_072_593e-8, 2.149_960_269_939_665_3e-6,
        -1.550_844_350_118_602_6e-6, -6.456_730_428_469_619e-6, 1.037_359_184_045_599_8e-5,
        1.334_176_149_921_350_4e-5, -4.175_141_648_540_398e-5, -1.155_409_103_833_717_2e-5,
        0.000_126_204_335_016_617_08, -4.555_682_696_668_42e-5, -0.000_303_102_046_072_661_2,
        0.000_281_763_925_038_067_07, 0.000_581_075_975_053_286_4, -0.000_942_461_407_722_737_7,
        -0.000_844_862_666_553_777_5, 0.002_400_697_781_890_973_2, 0.000_716_982_182_106_401_9,
        -0.005_071_314_509_218_348, 0.000_562_571_574_840_353_2, 0.009_214_785_032_197_18,
        -0.004_131_306_656_031_089, -0.014_701_882_065_398_682, 0.011_290_497_278_685_965,
        0.020_904_645_255_655_243, -0.023_114_134_020_549_317, -0.026_891_493_880_894_516,
        0.040_054_981_105_115_95, 0.031_989_877_531_537_81, -0.061_766_208_708_413_16,
        -0.036_605_103_402_874_296, 0.087_204_398_262_039_75, 0.043_095_895_433_047_64,
        -0.114_731_170_710_744_37, -0.056_586_458_630_727_38, 0.141_414_734_073_382_68,
        0.085_638_121_556_151_05, -0.159_912_565_158_244_37, -0.141_795_685_973_059_6,
        0.149_985_119_618_717_02, 0.232_125_963_835_353_1, -0.062_266_506_047_824_32,
        -0.321_675_637_808_997_9, -0.182_867_667_708_335_9, 0.213_050_571_355_578_5,
        0.493_356_078_517_100_8, 0.496_591_175_311_718_1, 0.330_775_781_411_014_66,
        0.160_071_993_564_110_7, 0.057_889_943_612_859_256, 0.015_637_249_347_572_157,
        0.003_083_088_119_253_751_7, 0.000_421_170_266_472_711_63, 3.576_251_994_264_023e-5,
        1.425_776_641_674_131_8e-6,
    ]),
    ("sym2", &[
        -0.129_409_522_551_260_37, 0.224_143_868_042_013_4, 0.836_516_303_737_807_9,
        0.482_962_913_144_534_16,
    ]),
    ("sym3", &[
        0.035_226_291_885_709_53, -0.085_441_273_882_026_66, -0.135_011_020_010_254_58,
        0.459_877_502_118_491_54, 0.806_891_509_311_092_5, 0.332_670_552_950_082_63,
    ]),
    ("sym4", &[
        -0.075_765_714_789_502_21, -0.029_635_527_646_002_493, 0.497_618_667_632_775,
        0.803_738_751_805_132_1, 0.297_857_795_605_306_06, -0.099_219_543_576_633_53,
        -0.012_603_967_262_031_304, 0.032_223_100_604_051_466,
    ]),
    ("sym5", &[
        0.027_333_068_344_998_768, 0.029_519_490_925_706_26, -0.039_134_249_302_313_844,
        0.199_397_533_976_855_58, 0.723_407_690_404_040_7, 0.633_978_963_456_792,
        0.016_602_105_764_510_85, -0.175_328_089_908_056_23, -0.021_101_834_024_689_042,
        0.019_538_882_735_249_827,
    ]),
    ("sym6", &[
        0.015_404_109_327_044_824, 0.003_490_712_084_222_162_6, -0.117_990_111_148_520_02,
        -0.048_311_742_585_698_06, 0.491_055_941_927_973_75, 0.787_641_141_028_651,
        0.337_929_421_728_165_8, -0.072_637_522_786_376_58, -0.021_060_292_512_370_85,
        0.044_724_901_770_781_39, 0.001_767_711_864_254_007_7, -0.007_800_708_325_032_38,
    ]),
    ("sym7", &[
        0.002_681_814_568_260_147, -0.001_047_384_888_679_738, -0.012_636_303_403_240_567,
        0.030_515_513_165_877_885, 0.067_892_693_501_220_57, -0.049_552_834_937_042_83,
        0.017_441_255_086_835_708, 0.536_101_917_090_569_2, 0.767_764_317_004_882_9,
        0.288_629_631_750_647_9, -0.140_047_240_442_933_65, -0.107_808_237_703_289_72,
        0.004_010_244_871_522_395_5, 0.010_268_176_708_464_817,
    ]),
    ("sym8", &[
        -0.003_382_415_951_005_002_8, -0.000_542_132_331_800_010_7, 0.031_695_087_811_525_99,
        0.007_607_487_324_976_609, -0.143_294_238_351_272_67, -0.061_273_359_067_811_076,
        0.481_359_651_259_053_4, 0.777_185_751_699_628, 0.364_441_894_836_178_95,
        -0.051_945_838_107_881_8, -0.027_219_029_917_103_486, 0.049_137_179_673_730_29,
        0.003_808_752_013_894_489_6, -0.014_952_258_337_062_199, -0.000_302_920_514_724_133_1,
        0.001_889_950_332_767_689,
    ]),
    ("sym9", &[
        0.001_400_915_525_914_656_2, 0.000_619_780_888_985_507_1, -0.013_271_967_781_817_134,
        -0.011_528_210_207_679_187, 0.030_224_878_858_275_187, 0.000_583_462_746_124_981_9,
        -0.054_568_958_430_833_35, 0.238_760_914_607_305_17, 0.717_897_082_764_412_4,
        0.617_338_449_140_934_2, 0.035_272_488_035_271_04, -0.191_550_831_297_284_34,
        -0.018_233_770_779_395_506, 0.062_077_789_302_885_746, 0.008_859_267_493_400_267,
        -0.010_264_064_027_633_121, -0.000_473_154_498_680_043_54, 0.001_069_490_032_908_612,
    ]),
    ("sym10", &[
        0.000_770_159_809_114_459_9, 9.563_267_072_285_273e-5, -0.008_641_299_277_022_15,
        -0.001_465_382_581_304_610_4, 0.045_927_239_231_091_51, 0.011_609_893_903_711_319,
        -0.159_494_278_884_910_6, -0.070_880_535_783_231_57, 0.471_690_666_938_442_9,
        0.769_510_037_021_097_9, 0.383_826_761_067_076_3, -0.035_536_740_473_819_585,
        -0.031_990_056_882_428_11, 0.049_994_972_077_375_154, 0.005_764_912_033_581_15,
        -0.020_354_939_812_311_11, -0.000_804_358_932_016_451_3, 0.004_593_173_585_311_792,
        5.703_608_361_849_501e-5, -0.000_459_329_421_004_652_06,
    ]),
    ("sym11", &[
        0.000_182_396_281_884_717_23, 3.032_235_799_056_933e-5, -0.001_547_176_372_350_647_6,
        0.000_965_156_768_663_468_8, 0.007_529_950_423_726_059, -0.007_119_110_903_185_566,
        -0.018_680_017_455_776_65, 0.045_806_026_757_461_774, 0.084_240_753_506_410_98,
        -0.001_410_352_583_967_668_6, 0.119_768_979_962_474_9, 0.581_248_882_540_640_4,
        0.716_393_134_437_828, 0.207_933_431_899_600_7, -0.231_801_954_519_577_9,
        -0.157_805_774_016_697_01, 0.033_058_587_166_848_81, 0.043_769_016_509_632_26,
        -0.001_961_294_999_962_751_6, -0.006_771_448_704_106_258, -7.657_724_495_807_18e-5,
        0.000_460_630_560_514_837_3,
    ]),
    ("sym12", &[
        -0.000_179_066_586_975_084_47, -1.815_807_886_263_295_8e-5, 0.002_350_297_614_183_347_3,
        0.000_307_647_796_310_524_55, -0.014_589_836_449_233_534, -0.002_604_391_031_331_419,
        0.057_804_179_445_504_75, 0.015_301_740_622_480_154, -0.170_370_697_238_849_62,
        -0.078_332_622_316_315_44, 0.462_741_031_219_286_45, 0.763_479_097_783_640_5,
        0.398_885_972_390_192, -0.022_162_306_170_351_302, -0.035_848_830_736_954_634,
        0.049_179_318_299_661_2, 0.007_553_780_611_679_315, -0.024_220_722_675_013_403,
        -0.001_408_909_244_329_129, 0.007_414_965_517_654_315, 0.000_180_214_090_085_217_52,
        -0.001_349_755_755_571_579, -1.135_392_804_152_661_2e-5, 0.000_111_967_194_246_565_28,
    ]),
    ("sym13", &[
        6.820_325_263_074_355e-5, -3.573_862_364_871_594e-5, -0.001_136_063_438_927_969,
        -0.000_170_942_858_529_572_13, 0.007_526_225_389_968_17, 0.005_296_359_738_721_862,
        -0.020_216_768_133_395_468, -0.017_211_642_726_304_387, 0.013_862_497_435_838_41,
        -0.059_750_627_717_956_466, -0.124_362_460_751_503_38, 0.197_704_818_771_265_97,
        0.695_739_150_561_569_1, 0.644_564_383_901_157_1, 0.110_230_223_021_286_88,
        -0.140_490_093_113_675_52, 0.008_819_757_670_429_852, 0.092_926_030_899_143_97,
        0.017_618_296_880_645_045, -0.020_749_686_325_520_652, -0.001_492_447_274_258_728_6,
        0.005_674_853_760_123_338, 0.000_413_261_198_841_678_2, -0.000_721_364_385_136_375_5,
        3.690_537_342_323_894e-5, 7.042_986_690_696_273e-5,
    ]),
    ("sym14", &[
        4.220_014_320_785_332e-5, 3.617_255_773_615_614_7e-6, -0.000_635_485_188_132_232_8,
        -6.766_044_627_562_865e-5, 0.004_537_697_585_299_536, 0.000_623_520_312_297_851_2,
        -0.020_584_582_837_441_37, -0.003_849_274_235_503_194_4, 0.067_616_851_093_097_54,
        0.018_650_326_535_643_823, -0.177_921_945_892_768_36, -0.084_307_682_946_156_23,
        0.454_616_938_989_820_86, 0.758_532_264_766_902_3, 0.411_071_490_655_833_04,
        -0.010_996_383_074_838_904, -0.039_068_586_652_700_88, 0.047_550_981_847_758_46,
        0.009_169_283_163_902_43, -0.026_916_568_572_214_482, -0.002_057_460_544_117_631_3,
        0.010_043_011_989_769_748, 0.000_359_642_672_539_782_5, -0.002_517_650_818_699_378_4,
        -4.160_741_858_341_911e-5, 0.000_385_641_004_328_366_8, 2.345_416_590_374_714e-6,
        -2.736_243_223_877_862e-5,
    ]),
    ("sym15", &[
        1.149_781_130_579_714e-5, 2.378_237_444_099_173_4e-6, -0.000_153_956_466_610_986_98,
        -3.346_002_792_182_661_6e-6, 0.000_923_420_370_514_021_4, -0.000_403_569_719_451_446_7,
        -0.003_851_748_675_707_289, 0.002_742_964_322_276_114_3, 0.010_333_830_120_957_618,
        -0.014_456_868_629_651_913, -0.025_623_245_712_566_977, 0.047_234_823_189_840_18,
        0.085_488_594_405_380_66, 0.025_576_698_837_712_75, 0.178_013_131_499_979_24,
        0.601_747_622_006_098_5, 0.676_847_218_461_176, 0.156_270_214_279_115_47,
        -0.272_723_150_226_592_3, -0.167_229_922_283_365_17, 0.066_767_885_926_144_34,
        0.071_988_429_316_745_58, -0.009_695_052_646_914_75, -0.019_665_344_418_785_383,
        0.000_744_659_055_509_967_9, 0.003_707_383_491_297_553_3, 2.870_497_458_575_763_8e-5,
        -0.000_428_891_685_154_853_5, -5.007_710_613_551_416_5e-6, 2.421_024_521_816_031e-5,
    ]),
    ("sym16", &[
        -1.003_916_009_210_644_2e-5, -7.453_525_766_266_454e-7, 0.000_170_757_570_335_769_04,
        1.531_073_536_887_549_4e-5, -0.001_382_107_535_988_377_2, -0.000_153_977_411_442_767_44,
        0.007_111_471_869_857_564, 0.001_021_764_336_646_459, -0.026_315_035_474_720_194,
        -0.005_132_825_563_984_341, 0.075_736_918_208_208_33, 0.021_674_416_285_613_81,
        -0.183_287_655_510_719_9, -0.089_220_638_091_438_83, 0.447_268_271_408_732_1,
        0.754_352_459_981_060_9, 0.421_225_066_054_648_77, -0.001_488_331_530_890_039_5,
        -0.041_818_790_513_308_24, 0.045_534_628_186_686_5, 0.010_626_580_114_659_839,
        -0.028_752_329_227_440_948, -0.002_716_134_284_290_722_3, 0.012_364_761_246_703_831,
        0.000_581_496_827_499_771_1, -0.003_822_225_760_374_699, -9.329_971_738_961_008e-5,
        0.000_815_853_010_908_030_9, 9.778_834_875_948_431e-6, -0.000_108_040_567_557_186_13,
        -4.975_057_614_655_637e-7, 6.700_909_264_582_751e-6,
    ]),
    ("sym17", &[
        3.791_253_194_331_624_7e-6, -2.452_716_342_574_082_5e-6, -7.607_124_405_602_918e-5,
        2.520_793_314_067_132_2e-5, 0.000_719_827_064_214_545_3, 5.840_042_869_518_092e-5,
        -0.003_932_325_279_794_941, -0.001_905_407_689_856_405_5, 0.012_396_988_366_634_302,
        0.009_952_982_523_507_613, -0.018_038_897_241_901_39, -0.007_261_634_750_933_915,
        0.016_158_808_725_918_57, -0.086_070_874_720_632_64, -0.155_076_005_349_706_9,
        0.180_539_584_580_744_07, 0.681_488_995_344_317, 0.650_716_629_204_382_3,
        0.142_398_350_415_113_9, -0.118_566_932_610_998_56, 0.017_271_178_210_600_19,
        0.104_754_614_842_194_89, 0.017_903_952_214_389_49, -0.033_291_383_492_306_22,
        -0.004_819_212_803_181_354, 0.010_482_366_933_016_147, 0.000_856_770_070_192_802_2,
        -0.002_741_675_975_678_181_3, -0.000_138_642_302_681_013_27, 0.000_475_996_380_263_183_04,
        -1.350_638_339_979_910_7e-5, -6.293_702_597_545_909e-5, 2.780_126_693_825_943e-6,
        4.297_343_327_338_256e-6,
    ]),
    ("sym18", &[
        2.485_961_490_308_411e-6, 6.729_793_997_408_882e-7, -4.500_780_415_588_217e-5,
        -5.793_109_601_174_063e-6, 0.000_410_348_429_907_390_44, 5.672_412_058_691_769e-5,
        -0.002_341_177_244_768_922_4, -0.000_275_686_170_648_977_6, 0.009_856_762_134_333_768,
        0.001_719_242_918_109_361_5, -0.030_856_126_294_944_98, -0.005_371_485_930_637_385,
        0.083_953_382_010_536_97, 0.028_758_420_486_383_298, -0.176_732_192_364_178_14,
        -0.078_169_930_321_518_09, 0.452_929_379_218_676_43, 0.752_385_856_803_573_5,
        0.420_296_170_314_231, -0.007_290_779_523_199_082, -0.055_614_014_578_312_62,
        0.036_720_158_010_816_75, 0.008_596_398_059_412_116, -0.031_584_438_079_381_97,
        -0.003_958_415_362_757_906, 0.014_251_048_369_883_76, 0.000_770_873_343_824_078_1,
        -0.005_244_687_839_765_25, -0.000_190_169_009_921_159_26, 0.001_387_216_955_292_587,
        3.172_057_444_776_149e-5, -0.000_258_292_434_168_883_8, -4.066_698_986_845_518e-6,
        3.012_419_436_219_728_4e-5, 4.304_977_141_536_891_7e-7, -1.590_242_939_774_858_2e-6,
    ]),
    ("sym19", &[
        6.755_201_818_929_4e-7, -8.313_469_459_030_021e-10, -1.224_727_457_984_906e-5,
        1.510_436_860_729_092_4e-6, 0.000_107_460_870_754_609_64, -1.687_940_058_814_816e-5,
        -0.000_571_989_632_058_227_2, 0.000_147_622_640_797_372_36, 0.002_048_576_258_690_670_8,
        -0.001_116_311_693_207_969, -0.005_414_364_535_404_443_5, 0.006_472_377_454_143_769,
        0.014_539_847_758_961_449, -0.018_939_903_459_627_11, -0.032_696_784_891_697_944,
        0.037_692_797_544_700_35, 0.066_443_512_475_187_79, 0.017_744_113_312_349_975,
        0.192_686_302_150_838_48, 0.608_506_934_666_496_6, 0.668_941_331_912_055_3,
        0.156_686_727_456_497_75, -0.266_931_170_740_680_8, -0.158_959_736_415_851_82,
        0.086_660_217_331_807_66, 0.083_924_976_253_167_36, -0.021_737_338_713_066_483,
        -0.032_391_307_449_362_985, 0.003_402_236_823_012_579, 0.008_975_678_778_654_114,
        -0.000_400_913_281_035_854_6, -0.001_888_112_579_165_604, 4.461_285_471_930_810_6e-5,
        0.000_294_720_140_072_157_65, -3.185_451_666_730_451e-6, -2.984_807_902_370_432_4e-5,
        1.750_528_047_912_219_7e-9, 1.422_410_981_554_657_3e-6,
    ]),
    ("sym20", &[
        -6.060_783_323_267_337e-7, -1.989_806_831_623_091_8e-7, 1.203_307_277_542_689e-5,
        2.116_976_949_178_771_3e-6, -0.000_119_943_331_660_612_82, -1.667_787_014_144_557_7e-5,
        0.000_766_368_330_095_346_9, 9.956_735_583_217_703e-5, -0.003_526_134_862_723_496_6,
        -0.000_455_357_600_966_596_7, 0.012_629_544_684_414_584, 0.002_225_698_119_284_576_5,
        -0.035_521_311_590_283_03, -0.006_363_296_386_410_459, 0.089_948_104_972_465_14,
        0.032_702_001_711_966_036, -0.175_579_197_772_082_45, -0.075_696_181_049_638_7,
        0.451_845_891_912_696_6, 0.749_979_168_433_440_8, 0.423_970_090_372_207_73,
        -0.005_820_090_143_509_892, -0.062_384_578_089_837_356, 0.031_971_387_181_212_44,
        0.008_786_603_795_269_025, -0.032_645_018_939_176_124, -0.004_590_504_910_028_372,
        0.016_037_956_388_587_758, 0.001_089_326_537_633_148_6, -0.006_563_875_773_781_53,
        -0.000_272_870_798_769_923_34, 0.002_056_484_229_982_501, 6.265_510_187_839_038e-5,
        -0.000_478_438_489_661_875_53, -1.007_516_870_666_113_5e-5, 7.931_081_554_559_506e-5,
        1.511_709_054_395_429_4e-6, -8.160_708_300_277_826e-6, -1.266_995_180_441_895e-7,
        3.859_160_164_817_888e-7,
    ]),
    ("coif1", &[
        -0.015_655_728_135_791_993, -0.072_732_619_512_526_45, 0.384_864_846_864_857_7,
        0.852_572_020_211_600_4, 0.337_897_662_457_481_76, -0.072_732_619_512_526_45,
    ]),
    ("coif2", &[
        -0.000_720_549_445_520_347, -0.001_823_208_870_911_032, 0.005_611_434_819_368_834,
        0.023_680_171_946_847_77, -0.059_434_418_646_431_085, -0.076_488_599_078_280_76,
        0.417_005_184_423_239_03, 0.812_723_635_449_413_5, 0.386_110_066_822_762_83,
        -0.067_372_554_723_725_6, -0.041_464_936_786_871_78, 0.016_387_336_463_203_64,
    ]),
    ("coif3", &[
        -3.459_977_319_727_277_4e-5, -7.098_330_250_637_9e-5, 0.000_466_216_959_820_402_9,
        0.001_117_518_770_830_630_3, -0.002_574_517_688_136_797, -0.009_007_976_136_730_624,
        0.015_880_544_863_669_452, 0.034_555_027_573_297_73, -0.082_301_927_106_299_81,
        -0.071_799_821_619_154_84, 0.428_483_476_377_37, 0.793_777_222_626_087_2,
        0.405_176_902_409_118_2, -0.061_123_390_002_972_54, -0.065_771_911_281_469_36,
        0.023_452_696_142_077_165, 0.007_782_596_425_672_745_4, -0.003_793_512_864_380_801_5,
    ]),
    ("coif4", &[
        -1.784_990_914_493_346_6e-6, -3.259_647_940_030_750_6e-6, 3.122_986_159_919_526_5e-5,
        6.233_885_431_278_718e-5, -0.000_259_974_337_122_256_8, -0.000_589_020_224_633_216_4,
        0.001_266_561_078_925_660_3, 0.003_751_434_697_146_086, -0.005_658_283_800_130_883_5,
        -0.015_211_728_187_697_211, 0.025_082_253_337_949_608, 0.039_334_422_605_589_15,
        -0.096_220_424_535_952_64, -0.066_627_472_366_817_15, 0.434_386_033_114_356_53,
        0.782_238_934_424_282_6, 0.415_308_427_000_682_27, -0.056_077_319_603_569_26,
        -0.081_266_710_249_193_73, 0.026_682_304_669_604_834, 0.016_068_947_131_575_025,
        -0.007_346_167_936_268_05, -0.001_629_492_425_226_785_8, 0.000_892_313_902_537_003,
    ]),
    ("coif5", &[
        -9.604_010_112_767_892e-8, -1.623_799_517_204_833_5e-7, 2.061_220_398_578_878_3e-6,
        3.700_727_711_339_479_6e-6, -2.127_022_167_251_561_4e-5, -4.121_986_192_426_55e-5,
        0.000_140_356_328_123_732_43, 0.000_301_857_941_668_244_73, -0.000_637_558_926_125_881_2,
        -0.001_661_627_303_929_878_8, 0.002_431_575_442_538_288_6, 0.006_761_520_220_620_417,
        -0.009_159_507_338_676_163, -0.019_758_391_600_965_465, 0.032_674_799_467_057_35,
        0.041_287_530_472_117_834, -0.105_563_151_307_337_23, -0.062_037_751_574_981_95,
        0.437_982_306_659_163_3, 0.774_293_622_860_327_4, 0.421_571_266_730_754_35,
        -0.052_046_670_253_554_76, -0.091_921_588_060_086_09, 0.028_169_744_270_532_353,
        0.023_408_322_118_927_783, -0.010_131_584_846_900_275, -0.004_159_312_627_578_639,
        0.002_178_294_377_845_694_7, 0.000_358_577_741_161_757_7, -0.000_212_081_862_067_494,
    ]),
    ("coif6", &[
        -5.309_088_417_196_893e-9, -8.487_143_396_262_437e-9, 1.350_324_499_356_144_6e-7,
        2.255_997_852_816_182e-7, -1.659_619_295_102_420_9e-6, -2.924_385_559_757_523e-6,
        1.313_985_135_402_144e-5, 2.473_655_932_872_323e-5, -7.528_004_306_935_964e-5,
        -0.000_154_577_199_279_799_5, 0.000_325_222_359_010_240_76, 0.000_769_854_730_750_726_7,
        -0.001_157_435_013_427_334_6, -0.003_073_939_507_208_559, 0.003_857_658_270_593_686_7,
        0.009_591_090_175_904_052, -0.012_650_067_908_732_35, -0.022_950_153_279_849_065,
        0.038_881_326_251_510_76, 0.041_852_490_676_136_27, -0.112_260_807_964_817_23,
        -0.058_108_917_972_614_8, 0.440_401_191_126_852_8, 0.768_403_257_579_892_4,
        0.425_819_545_012_838_5, -0.048_764_072_175_673_87, -0.099_673_002_046_011_75,
        0.028_786_114_346_665_57, 0.029_645_772_891_323_84, -0.012_231_577_790_037_912,
        -0.007_029_406_391_002_729, 0.003_539_019_871_540_998, 0.001_091_624_712_325_903,
        -0.000_624_613_043_925_683_5, -8.117_002_626_784_84e-5, 5.077_548_783_634_056_5e-5,
    ]),
    ("coif7", &[
        -2.990_566_231_736_866e-10, -4.578_334_067_792_950_5e-10, 8.796_593_384_856_987e-9,
        1.393_510_388_521_645_1e-8, -1.255_091_319_079_457e-7, -2.069_320_524_393_852_6e-7,
        1.157_976_906_948_957_3e-6, 2.002_078_049_855_418_3e-6, -7.771_243_547_311_862e-6,
        -1.423_563_697_845_150_1e-5, 4.043_048_241_714_02e-5, 7.971_050_025_993_867e-5,
        -0.000_167_817_212_154_849_71, -0.000_369_066_828_734_895_36, 0.000_579_499_448_234_095_3,
        0.001_434_741_856_652_412_2, -0.001_801_537_283_333_042_5, -0.004_617_842_130_433_119,
        0.005_431_316_442_880_095, 0.012_052_338_241_841_622, -0.015_946_846_819_567_94,
        -0.025_154_257_568_539_024, 0.043_993_046_163_079_42, 0.041_705_357_602_576_79,
        -0.117_293_571_043_192_8, -0.054_751_241_648_150_456, 0.442_137_461_401_842_57,
        0.763_815_365_416_733_3, 0.428_888_807_249_422_6, -0.046_033_397_038_466_296,
        -0.105_556_168_221_561_29, 0.028_937_041_983_523_145, 0.034_910_505_104_742_72,
        -0.013_802_554_236_288_4, -0.009_938_895_269_080_58, 0.004_829_446_560_702_038,
        0.002_105_772_041_410_548, -0.001_169_314_428_579_763_3, -0.000_287_202_375_357_061_2,
        0.000_175_102_167_784_831_77, 1.871_135_500_141_218e-5, -1.222_225_062_406_577_2e-5,
    ]),
    ("coif8", &[
        -1.707_989_594_705_548_3e-11, -2.525_423_493_885_457e-11, 5.704_810_333_909_736e-10,
        8.669_995_082_338_711e-10, -9.271_205_591_546_297e-9, -1.454_000_853_375_352_6e-8,
        9.772_418_508_367_798e-8, 1.589_351_722_153_064_9e-7, -7.515_021_558_886_325e-7,
        -1.275_454_299_640_756_3e-6, 4.496_936_443_579_391e-6, 8.031_502_995_440_787e-6,
        -2.180_200_076_701_035_2e-5, -4.147_478_606_916_181e-5, 8.754_452_091_843_062e-5,
        0.000_181_692_876_484_310_21, -0.000_297_778_932_195_639_97, -0.000_687_171_643_348_004_5,
        0.000_896_776_063_079_679_8, 0.002_235_649_422_048_103, -0.002_544_003_710_245_273_6,
        -0.006_156_659_548_258_420_5, 0.007_065_827_011_035_096, 0.014_117_470_077_618_781,
        -0.018_985_244_695_254_866, -0.026_656_710_542_648_603, 0.048_252_371_085_682_255,
        0.041_185_806_676_256_54, -0.121_211_168_231_496_47, -0.051_860_743_161_188_674,
        0.443_442_549_841_526_03, 0.760_113_302_017_940_5, 0.431_209_815_555_087_6,
        -0.043_718_983_365_945_59, -0.110_169_976_983_470_16, 0.028_828_621_759_288_006,
        0.039_372_037_877_979_85, -0.014_978_462_081_708_433, -0.012_742_370_632_719_796,
        0.005_994_849_192_155_886, 0.003_300_825_010_616_110_3, -0.001_783_260_008_597_197,
        -0.000_623_560_447_457_940_3, 0.000_371_294_995_607_412_4, 7.547_367_838_165_04e-5,
        -4.829_631_521_409_294e-5, -4.368_264_820_320_075e-6, 2.954_336_521_414_886_5e-6,
    ]),
    ("coif9", &[
        -9.858_437_261_237_078e-13, -1.416_273_550_918_584e-12, 3.686_179_736_445_179e-11,
        5.417_100_964_283_038e-11, -6.723_464_414_885_984e-10, -1.013_627_568_817_046_6e-9,
        7.974_005_886_846_83e-9, 1.237_525_661_981_012_4e-8, -6.916_547_041_218_038e-8,
        -1.109_667_018_087_942_3e-7, 4.679_584_769_454_298_5e-7, 7.802_480_329_370_885e-7,
        -2.572_383_574_486_687_4e-6, -4.488_111_475_152_764e-6, 1.181_440_945_157_869_5e-5,
        2.177_639_641_002_902_5e-5, -4.613_708_198_462_493e-5, -9.135_595_508_746_476e-5,
        0.000_155_413_521_266_738_86, 0.000_336_913_869_284_827_1, -0.000_462_729_085_505_304_3,
        -0.001_095_745_627_952_607, 0.001_269_690_925_135_339_8, 0.003_113_227_788_384_303_7,
        -0.003_357_674_526_586_578_8, -0.007_614_042_448_258_917, 0.008_702_757_446_229_182,
        0.015_818_715_815_925_06, -0.021_754_553_510_948_845, -0.027_661_239_498_680_462,
        0.051_844_615_686_247_31, 0.040_473_767_455_728_96, -0.124_345_589_539_290_62,
        -0.049_348_866_293_629_17, 0.444_457_893_176_447_96, 0.757_045_523_384_378_9,
        0.433_026_751_103_154_2, -0.041_726_110_205_852_8, -0.113_883_508_190_045_09,
        0.028_572_667_556_949_285, 0.043_181_727_608_250_446, -0.015_860_223_894_792_906,
        -0.015_376_649_629_718_764, 0.007_022_340_460_196_237, 0.004_597_056_424_920_538,
        -0.002_421_241_673_651_648_5, -0.001_075_458_272_741_238, 0.000_626_473_032_139_715_9,
        0.000_182_284_859_663_422_6, -0.000_114_433_952_785_902_83, -1.978_720_443_246_248e-5,
        1.315_888_564_542_532_9e-5, 1.029_320_066_894_578_6e-6, -7.164_920_431_247_886e-7,
    ]),
    ("coif10", &[
        -5.737_961_266_897_435e-14, -8.044_508_599_489_87e-14, 2.374_617_931_225_516e-12,
        3.393_464_737_916_165_4e-12, -4.804_052_212_478_306e-11, -7.012_920_333_305_39e-11,
        6.333_121_950_019_276e-10, 9.467_830_636_939_1e-10, -6.118_910_132_543_529e-9,
        -9.396_332_747_419_24e-9, 4.620_903_057_304_52e-8, 7.315_542_758_722_408e-8,
        -2.840_907_583_862_188e-7, -4.657_624_401_004_923e-7, 1.462_445_031_978_212_2e-6,
        2.497_202_791_005_427_4e-6, -6.434_329_489_073_88e-6, -1.153_105_839_215_023e-5,
        2.454_191_012_102_919_7e-5, 4.672_498_135_481_277_6e-5, -8.202_162_255_997_293e-5,
        -0.000_168_579_834_332_239_72, 0.000_243_631_730_720_845_58, 0.000_545_167_370_860_596_1,
        -0.000_659_866_253_241_950_5, -0.001_574_858_223_192_361_5, 0.001_689_969_792_639_744_4,
        0.004_020_222_790_700_274, -0.004_218_113_884_810_503, -0.008_953_207_286_543_774,
        0.010_305_378_002_449_852, 0.017_205_912_498_319_59, -0.024_267_328_682_795_09,
        -0.028_310_063_944_428_573, 0.054_908_963_995_921_07, 0.039_668_349_279_538_065,
        -0.126_909_104_305_549_05, -0.047_145_262_538_020_274, 0.445_269_197_719_614_93,
        0.754_450_109_494_781_9, 0.434_488_182_162_711_34, -0.039_987_113_015_872_23,
        -0.116_936_070_502_068_99, 0.028_232_912_738_798_775, 0.046_462_747_054_700_44,
        -0.016_521_511_268_705_533, -0.017_820_445_781_285_544, 0.007_917_157_067_706_416,
        0.005_937_373_265_895_877_5, -0.003_053_992_493_811_565_6, -0.001_620_778_108_853_292_7,
        0.000_924_939_960_423_731_4, 0.000_343_455_026_180_156_84, -0.000_211_774_136_494_202_68,
        -5.264_472_185_921_727e-5, 3.445_969_323_417_022_6e-5, 5.173_962_608_452_715e-6,
        -3.551_205_538_569_571e-6, -2.442_764_864_884_845_6e-7, 1.742_367_480_312_722e-7,
    ]),
    ("coif11", &[
        -3.362_361_318_093_742_7e-15, -4.615_818_040_032_401e-15, 1.525_825_549_533_054_9e-13,
        2.129_278_459_464_559_4e-13, -3.391_025_392_797_988e-12, -4.818_423_114_601_900_4e-12,
        4.919_793_979_271_459e-11, 7.131_883_881_772_344e-11, -5.240_838_827_477_836e-10,
        -7.768_177_928_970_2e-10, 4.371_514_216_501_341e-9, 6.643_004_284_847_31e-9,
        -2.973_714_454_312_135_4e-8, -4.647_551_654_558_208_4e-8, 1.696_651_660_084_933_3e-7,
        2.737_693_363_700_019_6e-7, -8.287_967_353_524_098e-7, -1.387_375_484_579_689_3e-6,
        3.521_145_977_293_115_6e-6, 6.153_164_872_698_853e-6, -1.316_375_093_079_977_5e-5,
        -2.423_559_202_462_401e-5, 4.368_364_304_478_777_6e-5, 8.582_415_436_286_544e-5,
        -0.000_129_866_820_892_748_6, -0.000_275_426_877_846_729_5, 0.000_351_226_750_420_082_4,
        0.000_801_745_210_338_491_7, -0.000_886_177_518_056_273_7, -0.002_103_610_076_466_363_7,
        0.002_149_020_717_634_627, 0.004_922_673_261_101_512, -0.005_105_112_841_283_235,
        -0.010_160_884_866_512_015, 0.011_851_974_427_506_963, 0.018_329_643_336_621_633,
        -0.026_545_070_862_175_352, -0.028_702_596_019_727_925, 0.057_550_244_704_070_2,
        0.038_825_603_724_123_164, -0.129_043_732_225_264_22, -0.045_194_956_293_578_92,
        0.445_931_442_820_592_7, 0.752_217_544_040_237_3, 0.435_689_608_351_512_5,
        -0.038_452_460_685_844_05, -0.119_489_396_228_171_24, 0.027_847_051_241_316_45,
        0.049_312_538_937_724_984, -0.017_015_922_424_480_565, -0.020_073_251_976_164_122,
        0.008_691_538_302_863_682, 0.007_283_017_155_944_006, -0.003_663_863_529_158_745_7,
        -0.002_236_842_519_594_617, 0.001_252_073_039_885_081_8, 0.000_557_720_486_948_476_5,
        -0.000_338_108_042_014_540_06, -0.000_107_666_681_377_120_67, 6.942_759_574_780_768e-5,
        1.503_949_885_335_962e-5, -1.018_591_923_176_713_8e-5, -1.349_352_179_180_284_6e-6,
        9.510_573_210_512_222e-7, 5.829_773_387_691_353e-8, -4.246_658_850_505_321e-8,
    ]),
    ("coif12", &[
        -1.981_337_717_041_473_6e-16, -2.670_361_623_332_565_4e-16, 9.783_102_459_953_237e-15,
        1.337_454_812_966_310_3e-14, -2.369_380_882_301_043_3e-13, -3.290_045_600_002_305e-13,
        3.752_023_520_312_859_4e-12, 5.299_712_095_238_988e-12, -4.369_389_307_221_471_4e-11,
        -6.288_984_311_455_846e-11, 3.990_594_029_041_717e-10, 5.864_666_471_845_081e-10,
        -2.976_907_032_226_953e-9, -4.477_523_498_150_714_4e-9, 1.865_413_770_679_035e-8,
        2.879_531_926_985_975_7e-8, -1.002_258_113_198_792_7e-7, -1.593_123_053_096_027_8e-7,
        4.690_273_110_710_610_3e-7, 7.708_437_343_672_786e-7, -1.935_601_054_214_237e-6,
        -3.306_239_212_897_175_8e-6, 7.112_977_349_641_407e-6, 1.271_854_495_114_456_6e-5,
        -2.344_975_069_700_952_8e-5, -4.433_611_442_746_384_6e-5, 6.982_465_534_338_538e-5,
        0.000_141_168_603_373_613_1, -0.000_189_578_942_759_572_24, -0.000_411_989_871_359_586_8,
        0.000_476_992_733_288_641, 0.001_099_444_238_862_774, -0.001_138_485_255_144_293_6,
        -0.002_663_098_695_894_828, 0.002_638_532_076_072_489, 0.005_797_853_171_804_963,
        -0.006_002_793_708_808_538, -0.011_236_928_414_836_344, 0.013_330_755_435_505_158,
        0.019_235_228_829_337_57, -0.028_611_602_123_518_53, -0.028_908_947_441_411_717,
        0.059_848_196_860_644_41, 0.037_977_672_565_709_164, -0.130_848_066_566_158_66,
        -0.043_454_939_935_036_62, 0.446_481_522_889_573_9, 0.750_270_777_650_668_6,
        0.436_695_174_490_506_9, -0.037_085_058_154_118_96, -0.121_656_609_702_689_16,
        0.027_437_981_968_114_15, 0.051_807_720_248_046_06, -0.017_382_714_538_990_42,
        -0.022_144_389_024_790_892, 0.009_359_630_574_317_223, 0.008_608_649_814_937_596,
        -0.004_241_021_014_921_407, -0.002_903_349_624_995_667_6, 0.001_595_699_522_267_577_6,
        0.000_820_487_760_331_460_3, -0.000_489_469_076_530_950_5, -0.000_187_590_578_424_998_34,
        0.000_119_255_265_206_347_41, 3.319_558_670_785_468_6e-5, -2.219_929_936_143_942_8e-5,
        -4.255_365_106_601_993e-6, 2.965_411_949_878_775_6e-6, 3.510_411_417_820_053_4e-7,
        -2.531_117_984_656_268e-7, -1.397_637_418_143_627_6e-8, 1.037_010_009_101_512_8e-8,
    ]),
    ("coif13", &[
        -1.173_038_664_030_301_7e-17, -1.555_427_041_798_629_2e-17, 6.260_971_679_551_619e-16,
        8.406_602_973_450_897e-16, -1.641_324_405_964_773_2e-14, -2.233_977_995_235_26e-14,
        2.817_158_912_020_827e-13, 3.891_579_035_068_561_7e-13, -3.560_826_447_455_428_3e-12,
        -4.999_089_689_000_25e-12, 3.534_700_054_054_495e-11, 5.051_249_576_886_846e-11,
        -2.869_880_459_508_662_3e-10, -4.182_146_540_712_13e-10, 1.959_961_326_135_216e-9,
        2.918_639_970_454_812_3e-9, -1.149_212_756_630_932_3e-8, -1.753_054_627_301_799_6e-8,
        5.876_531_952_269_822_5e-8, 9.209_610_667_203_677e-8, -2.653_281_517_709_694e-7,
        -4.287_007_433_456_269_4e-7, 1.068_427_617_719_579e-6, 1.787_560_627_809_843_2e-6,
        -3.868_533_337_330_695e-6, -6.740_799_218_474_297e-6, 1.267_653_881_565_346_2e-5,
        2.318_774_250_938_065e-5, -3.779_966_209_999_3e-5, -7.329_758_910_003_689e-5,
        0.000_103_221_891_070_275_23, 0.000_213_916_888_995_290_58, -0.000_260_786_743_176_419_43,
        -0.000_576_688_125_956_356_5, 0.000_619_615_339_618_182_2, 0.001_430_105_186_856_121_4,
        -0.001_413_526_536_895_260_3, -0.003_237_559_413_824_625, 0.003_150_877_638_188_897,
        0.006_631_574_528_454_967, -0.006_899_115_322_911_729, -0.012_188_034_671_027_212,
        0.014_736_317_631_638_981, 0.019_961_196_145_953_52, -0.030_490_095_794_234_087,
        -0.028_979_133_162_987_15, 0.061_864_221_810_111_12, 0.037_142_979_208_708_41,
        -0.132_392_683_728_628_86, -0.041_891_314_001_197_784, 0.446_945_118_912_082_83,
        0.748_553_832_458_193_8, 0.437_549_543_314_135_3, -0.035_856_547_270_861_03,
        -0.123_519_156_339_833_3, 0.027_019_867_059_454_368, 0.054_008_705_513_055_77,
        -0.017_650_941_474_490_738, -0.024_047_340_050_364_83, 0.009_935_243_248_428_365,
        0.009_898_330_681_843_99, -0.004_780_675_949_334_216, -0.003_603_311_278_768_315_4,
        0.001_946_295_412_387_387, 0.001_125_533_913_083_125, -0.000_661_238_086_717_906,
        -0.000_293_381_069_398_928_23, 0.000_183_990_682_046_521_67, 6.181_045_384_455_713e-5,
        -4.083_713_796_575_875_4e-5, -1.008_560_197_073_056e-5, 6.952_301_751_263_799e-6,
        1.193_888_078_440_708_6e-6, -8.524_405_890_651_04e-7, -9.111_838_156_033_149e-8,
        6.701_078_769_903_018e-8, 3.363_298_512_034_629_7e-9, -2.536_460_462_157_101e-9,
    ]),
    ("coif14", &[
        -6.972_752_077_994_577e-19, -9.112_090_547_755_772e-19, 4.000_437_986_126_700_5e-17,
        5.286_274_517_465_631_5e-17, -1.128_606_731_711_684_6e-15, -1.509_368_053_411_073_3e-15,
        2.087_175_435_684_503_6e-14, 2.827_804_378_477_003_6e-14, -2.845_914_016_875_713_4e-13,
        -3.910_486_063_605_146e-13, 3.051_235_212_860_773e-12, 4.257_417_896_733_186_5e-12,
        -2.678_982_110_415_133_4e-11, -3.801_184_928_644_451e-11, 1.980_912_034_671_011e-10,
        2.862_848_247_030_911e-10, -1.259_075_210_002_466_2e-9, -1.856_868_475_293_970_6e-9,
        6.987_387_541_011_994e-9, 1.053_864_045_189_426_5e-8, -3.427_757_286_145_719e-8,
        -5.300_650_696_936_341e-8, 1.501_341_371_314_425e-7, 2.387_649_405_196_465e-7,
        -5.919_974_641_332_917e-7, -9.718_423_533_464_63e-7, 2.116_075_762_495_585_8e-6,
        3.602_893_601_306_651_6e-6, -6.895_709_397_840_08e-6, -1.225_451_572_546_570_7e-5,
        2.058_327_893_657_675_7e-5, 3.849_201_590_195_014e-5, -5.654_418_404_120_939_6e-5,
        -0.000_112_219_619_438_087_73, 0.000_143_904_135_880_426_03, 0.000_304_359_900_606_334_3,
        -0.000_342_972_861_506_240_3, -0.000_766_825_148_852_607_5, 0.000_777_720_156_610_195_5,
        0.001_785_618_198_903_610_3, -0.001_708_053_866_107_036_5, -0.003_814_524_076_580_170_7,
        0.003_679_323_501_977_375_4, 0.007_415_778_230_765_5, -0.007_785_202_417_072_225_5,
        -0.013_024_088_005_389_463, 0.016_067_283_926_065_302, 0.020_539_499_874_530_51,
        -0.032_201_852_564_064_62, -0.028_949_256_131_946_835, 0.063_646_203_141_354,
        0.036_331_876_238_180_02, -0.133_729_428_343_215_36, -0.040_477_093_152_291_74,
        0.447_340_656_753_740_5, 0.747_024_937_961_507_7, 0.438_284_759_950_160_9,
        -0.034_744_849_705_448_01, -0.125_137_136_008_854_62, 0.026_601_546_271_988_057,
        0.055_963_453_411_376_35, -0.017_842_354_152_438_636, -0.025_796_843_770_827_978,
        0.010_430_949_170_645_137, 0.011_142_552_109_514_69, -0.005_281_202_836_308_56,
        -0.004_323_062_280_774_556, 0.002_296_710_726_458_408_6, 0.001_466_121_456_990_641_4,
        -0.000_848_808_384_788_569_4, -0.000_424_637_328_697_168_4, 0.000_262_862_352_064_998_46,
        0.000_102_483_332_195_685_97, -6.692_604_993_754_285e-5, -1.999_557_639_740_937_6e-5,
        1.364_035_767_552_805_4e-5, 3.024_780_818_684_495_7e-6, -2.139_463_925_057_922e-6,
        -3.324_658_385_771_607e-7, 2.424_279_845_810_464e-7, 2.360_235_756_379_167e-8,
        -1.766_249_514_873_849_4e-8, -8.118_993_462_836_169e-10, 6.212_814_528_402_405e-10,
    ]),
    ("coif15", &[
        -4.159_057_393_063_562_3e-20, -5.364_244_753_127_261e-20, 2.552_475_920_584_871_8e-18,
        3.325_022_722_474_857_4e-18, -7.710_937_330_347_503e-17, -1.015_262_275_777_643e-16,
        1.528_582_254_287_464_8e-15, 2.035_879_447_713_056e-15, -2.236_551_020_293_379e-14,
        -3.015_982_985_137_597e-14, 2.575_890_601_011_181e-13, 3.520_513_878_910_66e-13,
        -2.432_134_740_307_776_5e-12, -3.372_807_196_757_149_5e-12, 1.936_074_181_554_064_6e-11,
        2.727_799_122_291_351e-11, -1.326_229_523_978_624_2e-10, -1.901_224_988_904_381_8e-10,
        7.940_677_605_424_42e-10, 1.160_183_521_485_022_4e-9, -4.207_104_779_368_382e-9,
        -6.276_946_965_454_188e-9, 1.992_151_339_689_276e-8, 3.042_030_690_552_266_5e-8,
        -8.500_698_229_913_93e-8, -1.332_072_673_921_234e-7, 3.291_526_254_111_232_7e-7,
        5.309_958_252_905_003e-7, -1.163_368_531_408_228_4e-6, -1.939_800_386_832_084_5e-6,
        3.772_091_064_754_690_7e-6, 6.534_415_586_793_015e-6, -1.126_710_177_400_907_2e-5,
        -2.041_399_071_873_256_6e-5, 3.112_248_367_221_642_5e-5, 5.943_677_222_391_49e-5,
        -7.986_582_333_506_879e-5, -0.000_161_805_329_554_367_63, 0.000_191_752_210_558_630_46,
        0.000_412_068_681_388_309_9, -0.000_435_542_943_792_670_4, -0.000_979_073_054_610_628_7,
        0.000_949_899_975_487_798_3, 0.002_158_498_466_530_980_5, -0.002_018_929_796_799_420_3,
        -0.004_384_524_134_541_961, 0.004_218_089_500_963_982, 0.008_146_642_682_593_413,
        -0.008_654_690_594_816_527, -0.013_756_093_488_966_996, 0.017_324_753_648_483_46,
        0.020_996_338_546_795_255, -0.033_765_908_136_196_3, -0.028_845_673_444_251_017,
        0.065_231_944_833_168_3, 0.035_549_881_608_625_26, -0.134_897_236_578_199_58,
        -0.039_190_569_612_499_78, 0.447_681_698_761_690_4, 0.745_652_213_371_078_1,
        0.438_924_408_531_362_1, -0.033_732_496_050_980_5, -0.126_555_848_928_643_74,
        0.026_188_534_841_724_06, 0.057_710_351_175_148_604, -0.017_973_423_829_255_167,
        -0.027_407_439_453_778_118, 0.010_857_812_184_642_856, 0.012_336_147_571_654_247,
        -0.005_742_902_847_255_388, -0.005_051_893_642_506_076, 0.002_641_753_814_723_817,
        0.001_835_660_446_690_03, -0.001_047_938_916_841_322_7, -0.000_580_011_044_153_467_3,
        0.000_354_581_385_613_476_1, 0.000_156_217_644_003_848_16, -0.000_100_881_562_891_500_38,
        -3.505_374_322_008_593e-5, 2.367_321_573_111_412e-5, 6.363_684_015_137_760_5e-6,
        -4.460_423_183_361_215e-6, -8.968_212_011_102_487e-7, 6.485_869_388_545_793e-7,
        9.197_256_712_539_524e-8, -6.831_331_679_744_406e-8, -6.102_214_747_289_204e-9,
        4.637_763_468_611_606_6e-9, 1.965_173_624_853_245e-10, -1.523_657_153_849_017_5e-10,
    ]),
    ("coif16", &[
        -2.488_234_874_087_105_3e-21, -3.171_243_373_967_864_5e-21, 1.626_584_021_224_700_8e-19,
        2.091_731_192_186_315_6e-19, -5.238_852_980_994_671e-18, -6.801_835_449_347_436e-18,
        1.108_243_033_413_450_4e-16, 1.453_726_079_805_952_7e-16, -1.732_015_321_824_564_2e-15,
        -2.297_130_946_940_807e-15, 2.132_762_085_663_95e-14, 2.862_384_604_227_304e-14,
        -2.155_086_699_964_126_7e-13, -2.929_603_467_665_681e-13, 1.837_741_692_652_944e-12,
        2.533_043_295_168_227e-12, -1.349_867_029_282_178_2e-11, -1.888_754_243_442_614_7e-11,
        8.674_866_101_263_907e-11, 1.233_822_423_910_208e-10, -4.937_872_384_599_662e-10,
        -7.149_797_543_708_523e-10, 2.514_431_389_815_212e-9, 3.712_889_030_843_456e-9,
        -1.154_860_009_891_163_5e-8, -1.742_573_716_313_695e-8, 4.817_367_733_205_772e-8,
        7.445_242_757_454_34e-8, -1.835_890_843_628_985_4e-7, -2.914_269_718_183_252e-7,
        6.424_757_126_690_243e-7, 1.051_045_524_180_126_6e-6, -2.073_723_145_043_525_8e-6,
        -3.511_162_939_515_858_6e-6, 6.196_734_772_234_442e-6, 1.091_902_605_100_446_8e-5,
        -1.720_027_603_845_478_7e-5, -3.175_372_313_273_221_4e-5, 4.450_165_161_739_413e-5,
        8.666_386_407_002_67e-5, -0.000_107_833_057_120_306_1, -0.000_222_376_566_475_264_5,
        0.000_246_554_833_390_521_53, 0.000_536_068_287_930_942_2, -0.000_537_860_849_646_121_5,
        -0.001_209_845_339_766_497_5, 0.001_134_738_599_370_214_4, 0.002_542_163_016_104_133_3,
        -0.002_343_200_188_184_489_4, -0.004_940_628_195_250_106, 0.004_762_320_192_500_802,
        0.008_823_187_183_975_602, -0.009_503_158_857_743_535, -0.014_395_049_063_084_732,
        0.018_511_294_910_050_092, 0.021_353_089_890_706_896, -0.035_199_027_313_865_5,
        -0.028_687_828_349_824_904, 0.066_651_641_589_487_73, 0.034_799_585_149_717_135,
        -0.135_925_914_989_123_43, -0.038_014_099_651_096_22, 0.447_978_447_653_280_76,
        0.744_410_851_077_594_3, 0.439_486_229_062_614_86, -0.032_805_463_833_586_94,
        -0.127_810_077_065_640_43, 0.025_784_229_907_446_45, 0.059_280_395_659_693_97,
        -0.018_056_760_773_823_4, -0.028_892_779_939_761_14, 0.011_225_397_391_087_62,
        0.013_476_845_139_049_088, -0.006_167_204_740_229_64, -0.005_781_576_422_578_688,
        0.002_977_777_483_156_302_3, 0.002_228_062_752_711_592, -0.001_254_910_401_428_914_3,
        -0.000_757_561_115_661_953_2, 0.000_457_580_954_185_085_9, 0.000_223_474_873_511_922_06,
        -0.000_142_765_209_520_539_23, -5.616_532_904_749_551e-5, 3.756_395_791_987_938e-5,
        1.176_562_457_990_958_6e-5, -8.174_656_304_120_633e-6, -1.996_008_603_624_96e-6,
        1.432_079_204_719_059_4e-6, 2.632_053_386_772_81e-7, -1.940_866_364_398_909e-7,
        -2.529_381_289_790_086e-8, 1.909_693_969_280_092e-8, 1.574_985_240_567_528e-9,
        -1.213_763_349_944_681_9e-9, -4.767_601_284_823_407_4e-11, 3.740_776_214_156_404e-11,
    ]),
    ("coif17", &[
        -1.492_573_176_705_147_4e-22, -1.881_677_148_105_947e-22, 1.035_410_490_873_247_3e-20,
        1.315_979_592_288_046_5e-20, -3.541_741_324_829_286e-19, -4.540_571_956_247_477e-19,
        7.963_782_939_035_077e-18, 1.030_439_481_739_055_5e-17, -1.324_052_488_356_664_8e-16,
        -1.730_194_696_072_985_5e-16, 1.735_944_443_740_551_8e-15, 2.292_546_657_107_991e-15,
        -1.869_277_810_146_247_7e-14, -2.496_820_150_249_267_6e-14, 1.700_156_764_661_081_3e-13,
        2.298_842_703_415_546e-13, -1.333_132_406_983_005_8e-12, -1.826_498_790_845_331e-12,
        9.153_903_474_792_873e-12, 1.272_176_115_369_507_8e-11, -5.572_204_369_998_765e-11,
        -7.864_847_350_619_417e-11, 3.037_030_461_263_032e-10, 4.359_447_175_469_891e-10,
        -1.494_280_879_087_876_3e-9, -2.184_804_774_551_490_3e-9, 6.682_924_028_386_818e-9,
        9.970_659_851_204_182e-9, -2.732_772_421_056_790_7e-8, -4.169_073_699_211_024e-8,
        1.026_952_662_704_410_3e-7, 1.605_915_327_087_736_7e-7, -3.562_354_702_980_367e-7,
        -5.726_779_955_346_247e-7, 1.145_130_377_692_255_5e-6, 1.899_280_681_977_994_3e-6,
        -3.422_757_310_554_498e-6, -5.883_630_730_192_029e-6, 9.540_946_084_267_75e-6,
        1.709_458_330_770_557_3e-5, -2.487_360_746_159_996e-5, -4.674_968_583_543_716e-5,
        6.085_540_589_948_546e-5, 0.000_120_635_443_369_131_7, -0.000_140_431_364_919_161_86,
        -0.000_293_917_372_978_154_75, 0.000_308_044_575_574_130_6, 0.000_675_005_372_287_670_9,
        -0.000_649_267_474_010_87, -0.001_455_559_805_082_794_6, 0.001_330_834_181_963_004_7,
        0.002_931_018_454_369_936_3, -0.002_678_142_335_294_391_8, -0.005_477_959_124_841_987,
        0.005_308_007_234_603_321, 0.009_446_275_522_838_596, -0.010_327_665_987_284_079,
        -0.014_951_364_256_061_295, 0.019_630_293_958_411_843, 0.021_627_181_084_123_398,
        -0.036_515_866_186_846_2, -0.028_490_198_136_857_305, 0.067_929_672_664_683_9,
        0.034_081_797_453_796_955, -0.136_838_665_829_663_67, -0.036_933_200_696_832_556,
        0.448_238_724_851_495_2, 0.743_281_221_441_139, 0.439_983_820_652_042,
        -0.031_952_352_520_615_03, -0.128_926_963_444_045_1, 0.025_390_658_639_329_412,
        0.060_698_836_099_323_736, -0.018_102_118_385_278_566, -0.030_265_350_462_571_627,
        0.011_541_898_708_774_485, 0.014_564_276_648_080_906, -0.006_556_154_798_272_959,
        -0.006_505_894_912_824_299, 0.003_302_319_453_433_164_5, 0.002_637_902_009_529_555_7,
        -0.001_466_566_388_660_569_3, -0.000_955_026_412_472_698_7, 0.000_570_189_268_780_202_1,
        0.000_304_264_891_091_875_8, -0.000_192_359_585_247_744_68, -8.403_499_221_716_05e-5,
        5.567_734_714_465_559e-5, 1.977_791_990_756_864e-5, -1.362_511_749_077_209_3e-5,
        -3.882_741_927_783_709e-6, 2.764_328_498_891_352e-6, 6.179_728_213_804_948e-7,
        -4.524_984_010_195_443_6e-7, -7.654_855_556_872_685e-8, 5.742_465_077_331_122_4e-8,
        6.919_675_145_357_251e-9, -5.301_395_728_318_188_5e-9, -4.058_719_040_596_705_6e-10,
        3.167_429_925_399_28e-10, 1.158_961_100_395_001_6e-11, -9.193_044_901_647_832e-12,
    ]),
];
